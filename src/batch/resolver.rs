use crate::error::{Error, Result};
use crate::query::{restli_list, QueryParams};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use tracing::debug;

/// Query parameter carrying the identifier list of a batch get
pub const IDS_PARAM: &str = "ids";

/// Remove repeated identifiers, keeping the first occurrence of each
pub fn dedup_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for id in ids {
        let id = id.into();
        if seen.insert(id.clone()) {
            unique.push(id);
        }
    }
    unique
}

/// Split identifiers into consecutive chunks of at most `max_chunk_size`
pub fn chunk_ids(ids: &[String], max_chunk_size: usize) -> Result<Vec<Vec<String>>> {
    if max_chunk_size == 0 {
        return Err(Error::encoding(
            "max_chunk_size",
            "chunk size must be greater than zero",
        ));
    }
    Ok(ids.chunks(max_chunk_size).map(<[String]>::to_vec).collect())
}

/// `ids=List(<id1>,<id2>,...)` for one chunk, each identifier percent-encoded
pub fn ids_param(chunk: &[String]) -> QueryParams {
    let mut params = QueryParams::new();
    params.push_raw(IDS_PARAM, restli_list(chunk));
    params
}

/// Fetch records for every identifier, one request per chunk
///
/// Chunks are requested sequentially in deduplicated order and their values
/// are appended chunk by chunk. Within a chunk the order follows the map the
/// batch call returned, so callers needing a strict order should sort by id.
/// The first failing chunk aborts the whole call.
pub async fn resolve_batches<R, I, S, F, Fut>(
    ids: I,
    max_chunk_size: usize,
    mut fetch_batch: F,
) -> Result<Vec<R>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(Vec<String>) -> Fut,
    Fut: Future<Output = Result<HashMap<String, R>>>,
{
    let unique = dedup_ids(ids);
    let chunks = chunk_ids(&unique, max_chunk_size)?;
    let total = chunks.len();

    let mut records = Vec::with_capacity(unique.len());
    for (index, chunk) in chunks.into_iter().enumerate() {
        debug!(chunk = index + 1, of = total, ids = chunk.len(), "Resolving batch");
        let batch = fetch_batch(chunk).await?;
        records.extend(batch.into_values());
    }

    debug!(
        requested = unique.len(),
        resolved = records.len(),
        "Batch resolution complete"
    );

    Ok(records)
}
