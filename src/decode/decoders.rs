//! First- and second-pass decoders

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use tracing::warn;

/// Counts keyed by a breakdown dimension (country, button, ...)
pub type Breakdown = BTreeMap<String, i64>;

/// First pass: decode a response body into its typed envelope
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse JSON: {e}"),
    })
}

/// Second pass: decode an opaque value into `map<string, T>`
///
/// Fails as a whole if the value is not an object or any entry does not
/// decode into `T`.
pub fn reinterpret<T: DeserializeOwned>(raw: &RawValue) -> Result<BTreeMap<String, T>> {
    serde_json::from_str(raw.get()).map_err(|e| {
        Error::reinterpret(
            format!("expected a map of typed records: {e}"),
            raw.get(),
        )
    })
}

/// Second pass for nested numeric breakdowns (`map<string, map<string, int>>`)
///
/// The outer value must be an object. Entries whose value is not itself a
/// numeric map are skipped; partial statistics are kept.
pub fn reinterpret_breakdowns(raw: &RawValue) -> Result<BTreeMap<String, Breakdown>> {
    let segments: BTreeMap<String, Box<RawValue>> = serde_json::from_str(raw.get())
        .map_err(|e| Error::reinterpret(format!("expected an object: {e}"), raw.get()))?;

    let mut decoded = BTreeMap::new();
    for (key, segment) in segments {
        match serde_json::from_str::<Breakdown>(segment.get()) {
            Ok(breakdown) => {
                decoded.insert(key, breakdown);
            }
            Err(e) => {
                warn!(
                    key = %key,
                    raw = segment.get(),
                    error = %e,
                    "Skipping undecodable breakdown"
                );
            }
        }
    }

    Ok(decoded)
}
