//! Fixed-size pagination over an ordered result set.

use std::ops::Range;

use super::{SelectionError, SelectionResult};

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageRequest {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Parse a raw `page` query value.
    ///
    /// Absent or non-integer values select the first page. Integers below 1
    /// are kept as-is and later fail with [`SelectionError::PageOutOfRange`].
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn number(&self) -> i64 {
        self.page
    }

    /// Half-open index range covered by this page.
    ///
    /// Returns `None` for page numbers below 1 or ranges that overflow.
    pub fn bounds(&self, page_size: usize) -> Option<Range<usize>> {
        if self.page < 1 {
            return None;
        }
        let start = usize::try_from(self.page - 1)
            .ok()?
            .checked_mul(page_size)?;
        let end = start.checked_add(page_size)?;
        Some(start..end)
    }
}

/// One page of results plus the size of the full set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, never more than [`QUESTIONS_PER_PAGE`].
    pub items: Vec<T>,
    /// Count of the whole filtered set, not just this page.
    pub total: usize,
    /// The page number that produced this slice.
    pub page: i64,
}

impl<T> Page<T> {
    /// Convert every item, keeping totals intact.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
        }
    }
}

/// Slice `items` down to the requested page.
///
/// An empty page is an error, whether the page lies past the end or the
/// input itself is empty.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> SelectionResult<Page<T>> {
    let total = items.len();
    let out_of_range = || SelectionError::PageOutOfRange {
        page: request.number(),
    };

    let range = request.bounds(QUESTIONS_PER_PAGE).ok_or_else(out_of_range)?;
    if range.start >= total {
        return Err(out_of_range());
    }

    let items = items
        .into_iter()
        .skip(range.start)
        .take(range.end - range.start)
        .collect();

    Ok(Page {
        items,
        total,
        page: request.number(),
    })
}
