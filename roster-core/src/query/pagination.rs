//! Fixed-size, 1-based pagination over the filtered rows.

use std::num::NonZeroUsize;

use crate::config::PagePolicy;
use crate::error::{ListError, ListResult};

/// Number of pages needed for `count` items. Zero items means zero pages.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// Highest page the view may sit on. An empty list still shows page 1.
pub fn last_page(total: usize) -> usize {
    total.max(1)
}

/// The contiguous slice shown on 1-based `page`; empty when the page is
/// past the end or is 0.
pub fn page_slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    let size = page_size.get();
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(size))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// A navigation control press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Page 1.
    First,
    /// One page back.
    Previous,
    /// One page forward.
    Next,
    /// The last page.
    Last,
    /// A 1-based page number.
    Number(usize),
}

impl PageRequest {
    /// The page this request asks for, before any range policy applies.
    /// `Previous` from page 1 asks for page 0.
    pub fn requested(self, current: usize, total: usize) -> usize {
        match self {
            PageRequest::First => 1,
            PageRequest::Previous => current.saturating_sub(1),
            PageRequest::Next => current.saturating_add(1),
            PageRequest::Last => last_page(total),
            PageRequest::Number(page) => page,
        }
    }

    /// Resolve against `total` pages under `policy`.
    pub fn resolve(
        self,
        current: usize,
        total: usize,
        policy: PagePolicy,
    ) -> ListResult<usize> {
        let requested = self.requested(current, total);
        let max = last_page(total);
        if (1..=max).contains(&requested) {
            return Ok(requested);
        }
        match policy {
            PagePolicy::Clamp => Ok(requested.clamp(1, max)),
            PagePolicy::Reject => {
                Err(ListError::PageOutOfRange { requested, total })
            }
        }
    }
}

/// Snapshot of the pagination controls for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Page being shown, 1-based.
    pub current: usize,
    /// Number of pages; 0 when nothing matches.
    pub total: usize,
}

impl Pager {
    /// Summary for `current` of `total` pages.
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// First/Previous are enabled.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Next/Last are enabled.
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Whether `page` is the one being shown.
    pub fn is_current(&self, page: usize) -> bool {
        self.current == page
    }

    /// One numbered control per page.
    pub fn numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, size(15)), 0);
        assert_eq!(total_pages(1, size(15)), 1);
        assert_eq!(total_pages(15, size(15)), 1);
        assert_eq!(total_pages(16, size(15)), 2);
        assert_eq!(total_pages(46, size(15)), 4);
    }

    #[test]
    fn last_page_length_is_bounded_by_page_size() {
        let items: Vec<usize> = (0..47).collect();
        for page_size in 1..=20 {
            let ps = size(page_size);
            let total = total_pages(items.len(), ps);
            let last = page_slice(&items, total, ps);
            assert_eq!(last.len(), items.len() - page_size * (total - 1));
            assert!((1..=page_size).contains(&last.len()));
        }
    }

    #[test]
    fn slices_three_items_in_pages_of_two() {
        let items = [1, 2, 3];
        assert_eq!(page_slice(&items, 1, size(2)), &[1, 2]);
        assert_eq!(page_slice(&items, 2, size(2)), &[3]);
        assert!(page_slice(&items, 3, size(2)).is_empty());
        assert!(page_slice(&items, 0, size(2)).is_empty());
    }

    #[test]
    fn clamp_policy_pulls_requests_into_range() {
        let policy = PagePolicy::Clamp;
        assert_eq!(PageRequest::Number(3).resolve(1, 2, policy), Ok(2));
        assert_eq!(PageRequest::Previous.resolve(1, 2, policy), Ok(1));
        assert_eq!(PageRequest::Next.resolve(2, 2, policy), Ok(2));
        assert_eq!(PageRequest::Number(0).resolve(2, 2, policy), Ok(1));
    }

    #[test]
    fn reject_policy_reports_out_of_range() {
        let policy = PagePolicy::Reject;
        assert_eq!(
            PageRequest::Number(3).resolve(1, 2, policy),
            Err(ListError::PageOutOfRange {
                requested: 3,
                total: 2
            })
        );
        assert_eq!(PageRequest::Next.resolve(1, 2, policy), Ok(2));
    }

    #[test]
    fn empty_list_keeps_page_one_reachable() {
        assert_eq!(
            PageRequest::Last.resolve(1, 0, PagePolicy::Reject),
            Ok(1)
        );
        let pager = Pager::new(1, 0);
        assert!(!pager.has_previous());
        assert!(!pager.has_next());
        assert_eq!(pager.numbers().count(), 0);
    }

    #[test]
    fn pager_controls_follow_position() {
        let first = Pager::new(1, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = Pager::new(3, 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
