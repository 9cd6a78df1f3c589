use serde::Serialize;

/// One page of a multi-page list or search response.
///
/// `results` keeps the order the API sent. `page <= total_pages` and
/// `results.len() <= total_results` are not enforced; the server is free
/// to report anything there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u64,
}

impl<T> PagedResult<T> {
    /// Whether the server reports a page after this one
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Convert each result, keeping the page metadata
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            page: self.page,
            results: self.results.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}
