//! Next-page selection for "load more"
//!
//! Two strategies exist:
//! - `PageCounter`: request `last_page + 1`. Correct regardless of page sizes.
//! - `ItemCount`: request `count / PAGE_SIZE + 1`. Only correct while every
//!   loaded page was full; after a short page it re-requests a page that was
//!   already loaded. Kept for compatibility with earlier releases.

use gh_client::PAGE_SIZE;
use gh_profile_config::PaginationStrategy;

use crate::state::PageTracker;

/// Page number derived from the number of loaded repositories
pub fn page_from_item_count(count: usize) -> u32 {
    (count / PAGE_SIZE) as u32 + 1
}

/// Page to request next for the given strategy
pub fn next_page(strategy: PaginationStrategy, pages: &PageTracker, loaded: usize) -> u32 {
    match strategy {
        PaginationStrategy::PageCounter => pages.last_page + 1,
        PaginationStrategy::ItemCount => page_from_item_count(loaded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(last_page: u32) -> PageTracker {
        PageTracker {
            last_page,
            exhausted: false,
        }
    }

    #[test]
    fn test_full_first_page_requests_page_two() {
        assert_eq!(next_page(PaginationStrategy::PageCounter, &tracker(1), 30), 2);
        assert_eq!(next_page(PaginationStrategy::ItemCount, &tracker(1), 30), 2);
    }

    #[test]
    fn test_item_count_after_short_page_requests_same_page_again() {
        // Page 1 returned 12 items: the heuristic asks for page 1 again
        assert_eq!(page_from_item_count(12), 1);
        assert_eq!(next_page(PaginationStrategy::ItemCount, &tracker(1), 12), 1);

        // Pages 1 and 2 full, page 3 short (45 items): page 2 would be re-requested
        assert_eq!(next_page(PaginationStrategy::ItemCount, &tracker(2), 45), 2);
    }

    #[test]
    fn test_item_count_can_skip_ahead() {
        // Duplicates from a re-requested page inflate the count past page boundaries
        assert_eq!(next_page(PaginationStrategy::ItemCount, &tracker(2), 90), 4);
    }

    #[test]
    fn test_page_counter_ignores_item_count() {
        assert_eq!(next_page(PaginationStrategy::PageCounter, &tracker(1), 12), 2);
        assert_eq!(next_page(PaginationStrategy::PageCounter, &tracker(3), 75), 4);
    }

    #[test]
    fn test_item_count_formula() {
        assert_eq!(page_from_item_count(0), 1);
        assert_eq!(page_from_item_count(29), 1);
        assert_eq!(page_from_item_count(60), 3);
        assert_eq!(page_from_item_count(61), 3);
    }
}
