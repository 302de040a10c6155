//! Manual pagination over an ordered candidate list.
//!
//! Pages are 1-based. When the requested page starts past the end of the
//! candidates, the [`ClampPolicy`] chosen by the caller decides which window is
//! returned instead.

use serde::{Deserialize, Serialize};

/// What to return when a page starts at or beyond the last candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Fall back to the last `size` candidates.
    LastFullPage,
    /// Fall back to the first page.
    FirstPage,
    /// Return an empty page, the way a store-backed pager does.
    Unclamped,
}

/// Requested page, as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Page numbers below 1 are read as the first page.
    pub fn effective_page(&self) -> usize {
        self.page.max(1)
    }

    fn raw_offset(&self) -> usize {
        (self.effective_page() - 1).saturating_mul(self.size)
    }
}

/// Half-open index range `[from, to)` into the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub from: usize,
    pub to: usize,
}

impl PageWindow {
    pub fn compute(
        request: PageRequest,
        total: usize,
        policy: ClampPolicy,
    ) -> Self {
        let mut from = request.raw_offset();
        if from >= total {
            from = match policy {
                ClampPolicy::LastFullPage => total.saturating_sub(request.size),
                ClampPolicy::FirstPage => 0,
                ClampPolicy::Unclamped => total,
            };
        }
        let to = from.saturating_add(request.size).min(total);

        Self { from, to }
    }

    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A bounded slice of an ordered candidate list plus the metadata a caller
/// needs to render pagination controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub records: Vec<T>,
    /// Page number as requested by the caller.
    pub page: usize,
    pub size: usize,
    /// Number of candidates before slicing.
    pub total: usize,
}

impl<T> PagedResult<T> {
    /// Number of pages of `size` needed for `total`; zero when `size` is zero.
    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.total.div_ceil(self.size)
        }
    }
}

/// Slice `candidates` according to `request` and `policy`.
pub fn paginate<T>(
    candidates: Vec<T>,
    request: PageRequest,
    policy: ClampPolicy,
) -> PagedResult<T> {
    let total = candidates.len();
    let window = PageWindow::compute(request, total, policy);

    let records = if window.is_empty() {
        Vec::new()
    } else {
        candidates
            .into_iter()
            .skip(window.from)
            .take(window.len())
            .collect()
    };

    PagedResult {
        records,
        page: request.page,
        size: request.size,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(
        page: usize,
        size: usize,
        total: usize,
        policy: ClampPolicy,
    ) -> (usize, usize) {
        let request = PageRequest::new(page, size);
        let w = PageWindow::compute(request, total, policy);
        (w.from, w.to)
    }

    #[test]
    fn in_range_pages_are_the_same_for_every_policy() {
        for policy in [
            ClampPolicy::LastFullPage,
            ClampPolicy::FirstPage,
            ClampPolicy::Unclamped,
        ] {
            assert_eq!(window(1, 10, 25, policy), (0, 10));
            assert_eq!(window(2, 10, 25, policy), (10, 20));
            assert_eq!(window(3, 10, 25, policy), (20, 25));
        }
    }

    #[test]
    fn last_full_page_clamps_to_the_tail() {
        assert_eq!(window(9, 10, 25, ClampPolicy::LastFullPage), (15, 25));
        assert_eq!(window(9, 10, 4, ClampPolicy::LastFullPage), (0, 4));
        assert_eq!(window(2, 10, 10, ClampPolicy::LastFullPage), (0, 10));
    }

    #[test]
    fn first_page_clamps_to_the_start() {
        assert_eq!(window(9, 10, 25, ClampPolicy::FirstPage), (0, 10));
        assert_eq!(window(2, 10, 10, ClampPolicy::FirstPage), (0, 10));
    }

    #[test]
    fn unclamped_pages_past_the_end_are_empty() {
        let request = PageRequest::new(4, 10);
        let w = PageWindow::compute(request, 25, ClampPolicy::Unclamped);
        assert!(w.is_empty());
    }

    #[test]
    fn empty_candidates_give_empty_pages() {
        for policy in [ClampPolicy::LastFullPage, ClampPolicy::FirstPage] {
            let result =
                paginate(Vec::<u32>::new(), PageRequest::new(3, 5), policy);
            assert!(result.records.is_empty());
            assert_eq!(result.total, 0);
            assert_eq!(result.page, 3);
            assert_eq!(result.size, 5);
        }
    }

    #[test]
    fn page_zero_reads_as_page_one() {
        assert_eq!(window(0, 10, 25, ClampPolicy::Unclamped), (0, 10));
    }

    #[test]
    fn zero_size_pages_are_empty() {
        let result = paginate(
            vec![1, 2, 3],
            PageRequest::new(1, 0),
            ClampPolicy::LastFullPage,
        );
        assert!(result.records.is_empty());
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages(), 0);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let max = usize::MAX;
        assert_eq!(window(max, max, 7, ClampPolicy::FirstPage), (0, 7));
        assert_eq!(window(max, 3, 7, ClampPolicy::LastFullPage), (4, 7));
    }

    #[test]
    fn paginate_slices_and_reports_metadata() {
        let result = paginate(
            (1..=7).collect(),
            PageRequest::new(2, 3),
            ClampPolicy::FirstPage,
        );
        assert_eq!(result.records, vec![4, 5, 6]);
        assert_eq!(result.total, 7);
        assert_eq!(result.total_pages(), 3);
    }
}
