//! Page slicing over already-ordered result sets.

use crate::config::QUESTIONS_PER_PAGE;
use serde::Deserialize;

/// A 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(usize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Pages below 1 clamp to the first page.
    pub fn new(page: usize) -> Self {
        Self(page.max(1))
    }

    /// Absent or non-numeric input means the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(|n| usize::try_from(n).ok())
            .map(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Raw `?page=` query. Kept as a string so a non-numeric value falls back to
/// page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for PageNumber {
    fn from(params: PageParams) -> Self {
        PageNumber::parse(params.page.as_deref())
    }
}

/// Returns `items[(page-1)*page_size .. page*page_size]`, clipped to the
/// slice. Past the end the result is empty, never an error.
pub fn paginate_with<T>(items: &[T], page: PageNumber, page_size: usize) -> &[T] {
    let start = (page.get() - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// [`paginate_with`] at the fixed [`QUESTIONS_PER_PAGE`].
pub fn paginate<T>(items: &[T], page: PageNumber) -> &[T] {
    paginate_with(items, page, QUESTIONS_PER_PAGE)
}
