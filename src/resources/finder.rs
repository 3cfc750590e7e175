use crate::error::Result;
use crate::pagination::{CursorStrategy, TokenCursor};
use crate::query::{encode, EncodingStyle, FilterSet, QueryParams};

/// A token-paged finder: filters, their encoding, and where paging starts
pub trait TokenFinder {
    /// Encoding style the endpoint expects
    const ENCODING: EncodingStyle;

    /// Filters for one call, in wire order
    fn filter_set(&self) -> FilterSet;

    /// Explicit starting token; when set only that page is fetched
    fn page_token(&self) -> Option<&str>;

    /// Per-call page size override
    fn page_size(&self) -> Option<u32>;

    /// Encoded filter parameters
    fn query(&self) -> Result<QueryParams> {
        encode(&self.filter_set(), Self::ENCODING)
    }

    /// Cursor for this call, falling back to `default_page_size`
    fn cursor(&self, default_page_size: u32) -> CursorStrategy {
        TokenCursor::from_token(self.page_token().map(str::to_string))
            .with_page_size(self.page_size().unwrap_or(default_page_size))
            .into()
    }
}
