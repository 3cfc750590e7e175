//! Response decoder module
//!
//! # Overview
//!
//! Responses are decoded in two passes. The first pass turns the body into
//! its typed envelope, leaving fields whose key set depends on the data
//! (keyed by date, by metric name, ...) as an opaque [`DynamicField`]. The
//! second pass reinterprets such a field on demand into a typed map.
//!
//! The second pass is strict: any key that does not decode fails the whole
//! field with [`Error::Reinterpret`](crate::Error::Reinterpret), carrying the
//! raw JSON. Nested numeric breakdowns are the one exception and skip the keys
//! that do not decode.

mod decoders;
mod types;

pub use decoders::{decode_json, reinterpret, reinterpret_breakdowns, Breakdown};
pub use types::DynamicField;
