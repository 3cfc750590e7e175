//! Pagination module
//!
//! Supports: token cursor (`pageToken`), offset cursor (`start`/`count`)
//!
//! # Overview
//!
//! A [`CursorStrategy`] is chosen once per resource and owns the cursor
//! state for one run. [`run_paginated`] drives a caller-supplied page fetch
//! until the strategy reports the result set is exhausted, appending each
//! page's elements in arrival order.

mod driver;
mod strategies;
mod types;

pub use driver::run_paginated;
pub use strategies::{
    CursorStrategy, OffsetCursor, TokenCursor, COUNT_PARAM, PAGE_SIZE_PARAM, PAGE_TOKEN_PARAM,
    START_PARAM,
};
pub use types::{
    Link, MetaData, NextPage, Page, PageMetadata, Paging, PagingResponse, PaginationState,
    TokenPageResponse,
};
