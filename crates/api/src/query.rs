//! Shared query parameter types for API handlers.

use respond_core::{PaginationSource, PaginationSummary};
use serde::Deserialize;
use validator::Validate;

/// Largest page size a client may ask for.
pub const MAX_PER_PAGE: u64 = 100;

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

/// Page parameters (`?page=&per_page=`), 1-based.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PageParams {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u64,
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = MAX_PER_PAGE))]
    pub per_page: u64,
}

impl PageParams {
    /// Pair the parameters with the size of the full result set.
    pub fn window(self, total: u64) -> PageWindow {
        PageWindow {
            page: self.page,
            per_page: self.per_page,
            total,
        }
    }
}

/// A requested page over a known number of items.
///
/// This is the pagination collaborator handed to paginated envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl PageWindow {
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)).saturating_mul(self.per_page)
    }

    /// Slice of `items` that falls on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(items.len());
        let len = usize::try_from(self.per_page).unwrap_or(usize::MAX);
        let end = start.saturating_add(len).min(items.len());
        &items[start..end]
    }
}

impl PaginationSource for PageWindow {
    fn summary(&self) -> PaginationSummary {
        let last_page = self.total.div_ceil(self.per_page.max(1)).max(1);
        PaginationSummary {
            per_page: self.per_page,
            offset: self.offset(),
            total: self.total,
            last_page,
            current_page: self.page,
            next_page: (self.page < last_page).then_some(self.page + 1),
            prev_page: (self.page > 1).then(|| self.page - 1),
        }
    }
}
