//! Opaque capture of dynamically shaped fields

use super::decoders::{reinterpret, reinterpret_breakdowns, Breakdown};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use std::fmt;

/// A response field kept as raw JSON until its typed reinterpretation
///
/// Only decodable from text (`serde_json::from_str`), never through
/// `serde_json::Value` or flattened structs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicField(Box<RawValue>);

impl DynamicField {
    /// Capture an already split raw value
    pub fn from_raw(raw: Box<RawValue>) -> Self {
        Self(raw)
    }

    /// Capture a JSON string, validating it is well formed
    pub fn from_json(json: impl Into<String>) -> Result<Self> {
        RawValue::from_string(json.into())
            .map(Self)
            .map_err(|e| Error::decode(format!("Invalid JSON for dynamic field: {e}")))
    }

    /// Raw JSON text
    pub fn raw(&self) -> &str {
        self.0.get()
    }

    /// Strict reinterpretation into `map<string, T>`
    pub fn reinterpret<T: DeserializeOwned>(&self) -> Result<BTreeMap<String, T>> {
        reinterpret(&self.0)
    }

    /// Best-effort reinterpretation into nested numeric breakdowns
    pub fn reinterpret_breakdowns(&self) -> Result<BTreeMap<String, Breakdown>> {
        reinterpret_breakdowns(&self.0)
    }
}

impl fmt::Debug for DynamicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DynamicField").field(&self.raw()).finish()
    }
}

impl PartialEq for DynamicField {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}
