//! Pagination driver
//!
//! Repeatedly calls a single-page fetch until the cursor strategy reports the
//! result set is exhausted. Pages are requested strictly one after another
//! because each request depends on the cursor returned by the previous one.

use super::strategies::CursorStrategy;
use super::types::{Page, PaginationState};
use crate::error::Result;
use crate::query::QueryParams;
use std::future::Future;
use tracing::debug;

/// Fetch every page and return the concatenated elements
///
/// `fetch_page` receives the cursor parameters for one request (to be merged
/// with the caller's own filter parameters) and performs a single round trip.
/// Any error aborts the run and is returned as-is; elements accumulated from
/// earlier pages are dropped. A page with no elements always ends the run,
/// whatever its metadata claims.
pub async fn run_paginated<T, F, Fut>(
    mut strategy: CursorStrategy,
    mut fetch_page: F,
) -> Result<Vec<T>>
where
    F: FnMut(QueryParams) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    strategy.validate()?;

    let mut elements = Vec::new();
    let mut state = PaginationState::new();

    while !state.done {
        let params = strategy.params();
        debug!(
            strategy = strategy.name(),
            page = state.pages + 1,
            cursor = %params,
            "Fetching page"
        );

        let Page {
            elements: page_elements,
            metadata,
        } = fetch_page(params).await?;

        let count = page_elements.len();
        state.add_page(count);
        debug!(page = state.pages, elements = count, "Page received");

        if count == 0 {
            state.mark_done();
            continue;
        }

        elements.extend(page_elements);

        if strategy.advance(&metadata).is_done() {
            state.mark_done();
        }
    }

    debug!(
        strategy = strategy.name(),
        pages = state.pages,
        elements = state.total_fetched,
        "Pagination complete"
    );

    Ok(elements)
}
