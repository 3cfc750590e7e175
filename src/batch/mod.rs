//! Batch identifier resolution
//!
//! Batch-get endpoints accept a bounded number of identifiers per call.
//! [`resolve_batches`] deduplicates the caller's identifiers (first occurrence
//! wins), splits them into chunks of at most `max_chunk_size`, and issues one
//! request per chunk in order.

mod resolver;

pub use resolver::{chunk_ids, dedup_ids, ids_param, resolve_batches, IDS_PARAM};
