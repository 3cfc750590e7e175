//! Filter set encoders
//!
//! One rendering per [`EncodingStyle`]. The finder discriminant always comes
//! first, then filters in declaration order.

use super::types::{EncodingStyle, FilterSet, FilterValue, Placement, QueryParams};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Characters that would corrupt the parameter grammar if used in a field name
const RESERVED_NAME_CHARS: &[char] = &['=', '&', '(', ')', ',', ':', '[', ']', ' ', '?', '#'];

/// Percent-encode a single filter value for the wire
pub fn encode_value(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encode a filter set into wire parameters
///
/// Absent filters and empty lists contribute nothing, so a set without any
/// present filter encodes to the discriminant alone (`q=search`).
pub fn encode(filters: &FilterSet, style: EncodingStyle) -> Result<QueryParams> {
    validate(filters, style)?;

    let mut params = QueryParams::new();
    params.push_raw("q", encode_value(&filters.finder));

    match style {
        EncodingStyle::IndexedArray => encode_indexed(filters, &mut params),
        EncodingStyle::RestliList => encode_restli(filters, &mut params),
        EncodingStyle::CriteriaList => encode_criteria(filters, &mut params),
    }

    Ok(params)
}

fn validate(filters: &FilterSet, style: EncodingStyle) -> Result<()> {
    if filters.finder.is_empty() {
        return Err(Error::encoding("q", "finder discriminant is empty"));
    }

    let mut seen = HashSet::new();
    for filter in &filters.filters {
        if filter.name.is_empty() {
            return Err(Error::encoding("", "filter name is empty"));
        }
        if filter.name.contains(RESERVED_NAME_CHARS) {
            return Err(Error::encoding(
                &filter.name,
                "filter name contains a reserved character",
            ));
        }
        if filter.name == "q" {
            return Err(Error::encoding(
                &filter.name,
                "'q' is reserved for the finder discriminant",
            ));
        }
        if !seen.insert(filter.name.as_str()) {
            return Err(Error::encoding(&filter.name, "filter declared twice"));
        }
        if style != EncodingStyle::CriteriaList
            && filter.placement == Placement::TopLevel
            && matches!(filter.value, Some(FilterValue::List(_)))
        {
            return Err(Error::encoding(
                &filter.name,
                format!("top-level placement only applies to scalar filters in {style} encoding"),
            ));
        }
    }

    Ok(())
}

fn encode_indexed(filters: &FilterSet, params: &mut QueryParams) {
    for (filter, value) in filters.present() {
        match (value, filter.placement) {
            (FilterValue::List(values), _) => {
                for (i, v) in values.iter().enumerate() {
                    params.push(format!("search.{}.values[{i}]", filter.name), v);
                }
            }
            (FilterValue::Scalar(v), Placement::Nested) => {
                params.push(format!("search.{}", filter.name), v);
            }
            (FilterValue::Scalar(v), Placement::TopLevel) => {
                params.push(filter.name.clone(), v);
            }
        }
    }
}

fn encode_restli(filters: &FilterSet, params: &mut QueryParams) {
    let mut tokens = Vec::new();
    let mut top_level = Vec::new();

    for (filter, value) in filters.present() {
        match (value, filter.placement) {
            (FilterValue::Scalar(v), Placement::TopLevel) => top_level.push((&filter.name, v)),
            (FilterValue::Scalar(v), Placement::Nested) => {
                tokens.push(restli_token(&filter.name, std::slice::from_ref(v)));
            }
            (FilterValue::List(values), _) => tokens.push(restli_token(&filter.name, values)),
        }
    }

    if !tokens.is_empty() {
        params.push_raw("search", format!("({})", tokens.join(",")));
    }
    for (name, v) in top_level {
        params.push(name.clone(), v);
    }
}

fn restli_token(name: &str, values: &[String]) -> String {
    format!("{name}:(values:{})", restli_list(values))
}

fn encode_criteria(filters: &FilterSet, params: &mut QueryParams) {
    for (filter, value) in filters.present() {
        match value {
            FilterValue::List(values) => {
                params.push_raw(filter.name.clone(), restli_list(values));
            }
            FilterValue::Scalar(v) => {
                params.push(filter.name.clone(), v);
            }
        }
    }
}

/// Render `List(a,b,c)` with each element percent-encoded
pub fn restli_list(values: &[String]) -> String {
    let encoded: Vec<String> = values.iter().map(|v| encode_value(v)).collect();
    format!("List({})", encoded.join(","))
}
