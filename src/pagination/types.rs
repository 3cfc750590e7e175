//! Pagination types
//!
//! Pages, their metadata, and the two response envelopes the API uses.

use serde::{Deserialize, Serialize};

/// Whether another page should be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Request another page with the advanced cursor
    Continue,
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }
}

/// Pagination metadata carried by one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMetadata {
    /// Opaque continuation token, absent on the last page
    Token {
        /// Token for the next page
        next_token: Option<String>,
    },
    /// Offset paging with a "next" link test
    Links {
        /// Whether the response advertised a `next` link
        has_next: bool,
    },
}

impl PageMetadata {
    /// Next-page token, if this metadata carries a non-empty one
    pub fn next_token(&self) -> Option<&str> {
        match self {
            Self::Token { next_token } => next_token.as_deref().filter(|t| !t.is_empty()),
            Self::Links { .. } => None,
        }
    }

    /// Whether a `next` link was advertised
    pub fn has_next_link(&self) -> bool {
        match self {
            Self::Links { has_next } => *has_next,
            Self::Token { .. } => false,
        }
    }
}

/// One network response: elements plus pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Resource records, in response order
    pub elements: Vec<T>,
    /// Pagination metadata
    pub metadata: PageMetadata,
}

impl<T> Page<T> {
    /// A token-paginated page
    pub fn with_token(elements: Vec<T>, next_token: Option<String>) -> Self {
        Self {
            elements,
            metadata: PageMetadata::Token { next_token },
        }
    }

    /// An offset-paginated page
    pub fn with_links(elements: Vec<T>, has_next: bool) -> Self {
        Self {
            elements,
            metadata: PageMetadata::Links { has_next },
        }
    }

    /// Whether the page carries no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements on the page
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

// ============================================================================
// Wire envelopes
// ============================================================================

/// `metadata` block of token-paginated responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    /// Token for the next page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Token-paginated response envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TokenPageResponse<T> {
    /// Pagination metadata
    #[serde(default)]
    pub metadata: MetaData,
    /// Records
    #[serde(default = "Vec::new")]
    pub elements: Vec<T>,
}

impl<T> From<TokenPageResponse<T>> for Page<T> {
    fn from(response: TokenPageResponse<T>) -> Self {
        Page::with_token(response.elements, response.metadata.next_page_token)
    }
}

/// A hypermedia link in a `paging` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation, e.g. `next` or `prev`
    #[serde(default)]
    pub rel: String,
    /// Target URL
    #[serde(default)]
    pub href: String,
    /// Media type
    #[serde(default, rename = "type")]
    pub link_type: Option<String>,
}

/// `paging` block of offset-paginated responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Offset of the first element
    #[serde(default)]
    pub start: u32,
    /// Requested page size
    #[serde(default)]
    pub count: u32,
    /// Total element count, when the API reports it
    #[serde(default)]
    pub total: Option<u64>,
    /// Navigation links
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Paging {
    /// Whether a link with this relation is present
    pub fn has_link(&self, rel: &str) -> bool {
        self.links.iter().any(|link| link.rel == rel)
    }
}

/// Offset-paginated response envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagingResponse<T> {
    /// Paging block
    #[serde(default)]
    pub paging: Paging,
    /// Records
    #[serde(default = "Vec::new")]
    pub elements: Vec<T>,
}

impl<T> From<PagingResponse<T>> for Page<T> {
    fn from(response: PagingResponse<T>) -> Self {
        let has_next = response.paging.has_link("next");
        Page::with_links(response.elements, has_next)
    }
}

// ============================================================================
// Run state
// ============================================================================

/// Counters for one pagination run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages: u32,
    /// Elements accumulated so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fetched page
    pub fn add_page(&mut self, elements: usize) {
        self.pages += 1;
        self.total_fetched += elements as u64;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}
