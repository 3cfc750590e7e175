//! Query encoding module
//!
//! Supports: indexed-array, RESTli list, criteria list
//!
//! # Overview
//!
//! Finder endpoints accept their search predicates in one of several
//! parameter conventions. A [`FilterSet`] describes the predicates once;
//! [`encode`] renders it into an ordered [`QueryParams`] list for a given
//! [`EncodingStyle`]. Encoding is deterministic: the same filter set always
//! yields the same parameters in the same order.

mod encoder;
mod types;

pub use encoder::{encode, encode_value, restli_list};
pub use types::{EncodingStyle, Filter, FilterSet, FilterValue, Placement, QueryParams};
