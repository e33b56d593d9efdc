//! Key Bindings Help Panel View
//!
//! Displays all available keybindings grouped by category.

use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::KeyBindingsPanelViewModel;
use crate::views::{View, ViewId};
use gh_profile_search_theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Left padding for content
const LEFT_PADDING: &str = "  ";

/// Key bindings help panel view
#[derive(Debug, Clone)]
pub struct KeyBindingsView;

impl KeyBindingsView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyBindingsView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for KeyBindingsView {
    fn view_id(&self) -> ViewId {
        ViewId::KeyBindings
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

/// Centered rectangle taking the given percentages of `area`
fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let width = area.width * width_percent / 100;
    let height = area.height * height_percent / 100;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let panel_area = centered(area, 60, 80);

    // Dim everything underneath
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);
    f.render_widget(Clear, panel_area);

    let vm = KeyBindingsPanelViewModel::from_state(state);

    let footer_hint = Line::from(vec![
        Span::styled(format!(" {}", vm.close_hint), theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);

    let block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint);

    let paragraph = Paragraph::new(build_content_lines(&vm, theme))
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, panel_area);
}

fn build_content_lines<'a>(vm: &KeyBindingsPanelViewModel, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for section in &vm.sections {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(section.category.clone(), theme.section_header()),
        ]));

        for binding in &section.bindings {
            lines.push(Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::styled(format!("{:<16}", binding.keys), theme.key_hint()),
                Span::styled(binding.description.clone(), theme.key_description()),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}
