//! Pagination, deterministic listing order, and the single-result
//! collapse rule.
//!
//! Listing operations return a page-shaped result carrying the content of
//! the requested page together with totals computed over the whole
//! filtered set. The collapse rule layered on top is decided by the total
//! match count, never by the size of the current page.

use crate::task::domain::Task;
use std::cmp::Ordering;

/// Number of tasks per page when the caller does not choose a size.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A request for one page of a listing.
///
/// Pages are numbered from 1; out-of-range inputs are clamped so a request
/// can always be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Creates a request for the given 1-based page with an explicit page
    /// size. A page of 0 is treated as page 1 and a size of 0 as size 1.
    #[must_use]
    pub const fn new(page: usize, size: usize) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            size: if size == 0 { 1 } else { size },
        }
    }

    /// Creates a request for the given page at [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub const fn of_page(page: usize) -> Self {
        Self::new(page, DEFAULT_PAGE_SIZE)
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of records preceding this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1) * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::of_page(1)
    }
}

/// One page of a task listing with totals over the whole result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPage {
    items: Vec<Task>,
    page: usize,
    total_pages: usize,
    total_items: usize,
}

impl TaskPage {
    /// Builds a page from its content, the request that produced it, and
    /// the total number of matches across the whole filtered set.
    #[must_use]
    pub fn new(items: Vec<Task>, request: PageRequest, total_items: usize) -> Self {
        Self {
            items,
            page: request.page(),
            total_pages: total_items.div_ceil(request.size()),
            total_items,
        }
    }

    /// Returns the tasks on this page.
    #[must_use]
    pub fn items(&self) -> &[Task] {
        &self.items
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the number of pages in the whole result set.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the number of matches across the whole result set, not
    /// just this page.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns whether this page carries no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Applies the single-result collapse rule.
    ///
    /// Zero total matches collapse to [`FindOutcome::NoMatches`]; exactly
    /// one total match collapses to [`FindOutcome::Single`] so the caller
    /// can present the record's detail view directly; anything else stays
    /// paged. The decision uses the total count, so one item on a page of
    /// a larger set does not collapse.
    #[must_use]
    pub fn into_outcome(self) -> FindOutcome {
        if self.total_items == 0 {
            return FindOutcome::NoMatches;
        }
        if self.total_items == 1 {
            let mut items = self.items;
            return match items.pop() {
                Some(task) => FindOutcome::Single(task),
                // A page past the end of a one-item set has nothing to
                // show.
                None => FindOutcome::NoMatches,
            };
        }
        FindOutcome::Paged(self)
    }
}

/// Tri-state result of a collapse-aware find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// The filtered set is empty; callers display a not-found condition
    /// rather than treating this as a hard error.
    NoMatches,
    /// Exactly one record matched across the whole set; callers forward
    /// to its detail view instead of rendering a one-item list.
    Single(Task),
    /// Several records matched; render the page.
    Paged(TaskPage),
}

/// Deterministic listing order: due date descending, ties broken by id
/// ascending so pagination is stable across requests absent writes.
#[must_use]
pub fn listing_order(a: &Task, b: &Task) -> Ordering {
    b.due_date()
        .cmp(&a.due_date())
        .then_with(|| a.id().cmp(&b.id()))
}
