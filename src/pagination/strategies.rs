//! Cursor strategy implementations
//!
//! Each strategy owns the cursor state of a single pagination run.

use super::types::{NextPage, PageMetadata};
use crate::error::{Error, Result};
use crate::query::QueryParams;

/// Query parameter carrying the continuation token
pub const PAGE_TOKEN_PARAM: &str = "pageToken";
/// Query parameter carrying the token page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";
/// Query parameter carrying the offset
pub const START_PARAM: &str = "start";
/// Query parameter carrying the offset page size
pub const COUNT_PARAM: &str = "count";

// ============================================================================
// Token Cursor
// ============================================================================

/// Opaque token pagination
///
/// The first request carries no token; each response's `nextPageToken`
/// becomes the next request's `pageToken`. When the caller starts from an
/// explicit token, exactly one page is fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCursor {
    token: Option<String>,
    single_page: bool,
    page_size: Option<u32>,
}

impl TokenCursor {
    /// Start from the first page and follow tokens until exhausted
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch exactly the page identified by `token`
    pub fn starting_at(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            single_page: true,
            page_size: None,
        }
    }

    /// `starting_at` when a token is given, `new` otherwise
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) => Self::starting_at(token),
            None => Self::new(),
        }
    }

    /// Send `pageSize` with every request
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Current token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether this cursor stops after one page
    pub fn is_single_page(&self) -> bool {
        self.single_page
    }

    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            params.push(PAGE_TOKEN_PARAM, token);
        }
        if let Some(size) = self.page_size {
            params.push(PAGE_SIZE_PARAM, size.to_string());
        }
        params
    }

    fn advance(&mut self, metadata: &PageMetadata) -> NextPage {
        if self.single_page {
            return NextPage::Done;
        }
        match metadata.next_token() {
            Some(next) => {
                self.token = Some(next.to_string());
                NextPage::Continue
            }
            None => NextPage::Done,
        }
    }
}

// ============================================================================
// Offset Cursor
// ============================================================================

/// `start`/`count` pagination driven by the presence of a `next` link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetCursor {
    start: u32,
    count: u32,
}

impl OffsetCursor {
    /// Start at offset 0 with a fixed page size
    pub fn new(count: u32) -> Self {
        Self::starting_at(0, count)
    }

    /// Start at an arbitrary offset
    pub fn starting_at(start: u32, count: u32) -> Self {
        Self { start, count }
    }

    /// Current offset
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Page size
    pub fn count(&self) -> u32 {
        self.count
    }

    fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(START_PARAM, self.start.to_string());
        params.push(COUNT_PARAM, self.count.to_string());
        params
    }

    fn advance(&mut self, metadata: &PageMetadata) -> NextPage {
        if !metadata.has_next_link() {
            return NextPage::Done;
        }
        self.start = self.start.saturating_add(self.count);
        NextPage::Continue
    }
}

// ============================================================================
// Strategy
// ============================================================================

/// Pagination convention of a resource, with its run state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorStrategy {
    /// `pageToken` continuation
    Token(TokenCursor),
    /// `start`/`count` offsets
    Offset(OffsetCursor),
}

impl CursorStrategy {
    /// Token strategy following all pages
    pub fn token() -> Self {
        Self::Token(TokenCursor::new())
    }

    /// Offset strategy from offset 0
    pub fn offset(count: u32) -> Self {
        Self::Offset(OffsetCursor::new(count))
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Token(_) => "token",
            Self::Offset(_) => "offset",
        }
    }

    /// Reject configurations that cannot make progress
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Token(cursor) if cursor.page_size == Some(0) => Err(Error::encoding(
                PAGE_SIZE_PARAM,
                "page size must be greater than zero",
            )),
            Self::Offset(cursor) if cursor.count == 0 => Err(Error::encoding(
                COUNT_PARAM,
                "page size must be greater than zero",
            )),
            _ => Ok(()),
        }
    }

    /// Cursor parameters for the next request
    pub fn params(&self) -> QueryParams {
        match self {
            Self::Token(cursor) => cursor.params(),
            Self::Offset(cursor) => cursor.params(),
        }
    }

    /// Consume a page's metadata and move the cursor forward
    pub fn advance(&mut self, metadata: &PageMetadata) -> NextPage {
        match self {
            Self::Token(cursor) => cursor.advance(metadata),
            Self::Offset(cursor) => cursor.advance(metadata),
        }
    }
}

impl From<TokenCursor> for CursorStrategy {
    fn from(cursor: TokenCursor) -> Self {
        Self::Token(cursor)
    }
}

impl From<OffsetCursor> for CursorStrategy {
    fn from(cursor: OffsetCursor) -> Self {
        Self::Offset(cursor)
    }
}
