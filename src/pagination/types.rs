//! Extraction options

/// Per-call knobs for one extraction
///
/// Everything here is optional; an empty `ExtractOptions` fetches every page
/// of the unfiltered review at the client's configured page size.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Vendor filter expression, passed through verbatim
    /// (e.g. `Location.Country eq 'Norway'`)
    pub filter: Option<String>,
    /// Cap on the number of pages fetched, mainly for testing against the
    /// live API without pulling the full dataset
    pub max_pages: Option<u32>,
    /// Override the client's configured page size for this call only
    pub page_size: Option<u32>,
}

impl ExtractOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter expression
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Cap the number of pages fetched
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Override the page size for this call
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
