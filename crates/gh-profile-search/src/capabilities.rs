//! Panel capability system
//!
//! Views declare capabilities so the keyboard middleware can route keys
//! without knowing about specific views. A view with TEXT_INPUT receives
//! plain characters as text, a view with ITEM_NAVIGATION receives j/k.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a panel can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Panel has a focused text input that consumes character keys
        const TEXT_INPUT = 1 << 0;

        /// Panel supports vim-style navigation keybindings (j, k, gg, G)
        const VIM_NAVIGATION_BINDINGS = 1 << 1;

        /// Panel can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 2;
    }
}

impl PanelCapabilities {
    /// Check if panel routes character keys to a text input
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if panel supports vim-style navigation (j/k)
    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::VIM_NAVIGATION_BINDINGS)
    }

    /// Check if panel supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_item_navigation());
    }

    #[test]
    fn test_flags_are_independent() {
        let caps = PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS;
        assert!(caps.supports_item_navigation());
        assert!(caps.supports_vim_navigation());
        assert!(!caps.accepts_text_input());
    }
}
