//! Query types
//!
//! Filter sets, encoding styles and the ordered wire parameter list.

use std::fmt;

/// Parameter convention used by a finder endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStyle {
    /// `search.f.values[0]=a&search.f.values[1]=b`
    #[default]
    IndexedArray,
    /// `search=(f:(values:List(a,b)),g:(values:List(c)))`
    RestliList,
    /// `f=List(a,b)&g=c`, no search wrapper
    CriteriaList,
}

impl fmt::Display for EncodingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IndexedArray => "indexed-array",
            Self::RestliList => "restli-list",
            Self::CriteriaList => "criteria-list",
        };
        f.write_str(name)
    }
}

/// Where a filter lands relative to the `search` namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Inside the search namespace (`search.f=...` or inside `search=(...)`)
    #[default]
    Nested,
    /// As its own top-level parameter (`f=...`). Scalars only.
    TopLevel,
}

/// Value of a present filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A single value
    Scalar(String),
    /// A list of values, order preserved
    List(Vec<String>),
}

impl FilterValue {
    /// A list with no elements carries no constraint
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(values) if values.is_empty())
    }
}

/// A named predicate; `value: None` means "do not constrain"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Wire name of the field
    pub name: String,
    /// Predicate value, absent when unconstrained
    pub value: Option<FilterValue>,
    /// Placement flag
    pub placement: Placement,
}

/// Ordered collection of filters for one finder call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    /// Finder discriminant sent as `q=<finder>`
    pub finder: String,
    /// Filters in the order they are encoded
    pub filters: Vec<Filter>,
}

impl FilterSet {
    /// Create an empty filter set for a finder (`search`, `criteria`, ...)
    pub fn new(finder: impl Into<String>) -> Self {
        Self {
            finder: finder.into(),
            filters: Vec::new(),
        }
    }

    /// Add a filter
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a list-valued filter
    #[must_use]
    pub fn list<I, V>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        self.optional_list(name, Some(values))
    }

    /// Add a list-valued filter that may be absent
    #[must_use]
    pub fn optional_list<I, V>(self, name: impl Into<String>, values: Option<I>) -> Self
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        let value =
            values.map(|v| FilterValue::List(v.into_iter().map(|x| x.to_string()).collect()));
        self.filter(Filter {
            name: name.into(),
            value,
            placement: Placement::Nested,
        })
    }

    /// Add a scalar filter inside the search namespace
    #[must_use]
    pub fn scalar(self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.optional_scalar(name, Some(value))
    }

    /// Add a scalar filter inside the search namespace that may be absent
    #[must_use]
    pub fn optional_scalar<V: fmt::Display>(
        self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.scalar_with(name, value, Placement::Nested)
    }

    /// Add a scalar filter emitted as its own parameter
    #[must_use]
    pub fn top_level_scalar(self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.optional_top_level_scalar(name, Some(value))
    }

    /// Add a top-level scalar filter that may be absent
    #[must_use]
    pub fn optional_top_level_scalar<V: fmt::Display>(
        self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.scalar_with(name, value, Placement::TopLevel)
    }

    fn scalar_with<V: fmt::Display>(
        self,
        name: impl Into<String>,
        value: Option<V>,
        placement: Placement,
    ) -> Self {
        self.filter(Filter {
            name: name.into(),
            value: value.map(|v| FilterValue::Scalar(v.to_string())),
            placement,
        })
    }

    /// Filters that will actually be encoded (absent and empty lists dropped)
    pub fn present(&self) -> impl Iterator<Item = (&Filter, &FilterValue)> {
        self.filters.iter().filter_map(|f| match &f.value {
            Some(value) if !value.is_empty_list() => Some((f, value)),
            _ => None,
        })
    }
}

/// Ordered list of wire parameters; values are stored already encoded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, percent-encoding the value
    pub fn push(&mut self, key: impl Into<String>, value: impl AsRef<str>) {
        let encoded = urlencoding::encode(value.as_ref()).into_owned();
        self.params.push((key.into(), encoded));
    }

    /// Append a parameter whose value is already in wire form
    pub fn push_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    /// Append every parameter of another list
    pub fn extend(&mut self, other: QueryParams) {
        self.params.extend(other.params);
    }

    /// Wire value of the first parameter with this key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a parameter with this key is present
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(key, wire value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Each parameter rendered as `key=value`
    pub fn to_pairs(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{k}={v}")).collect()
    }

    /// Render as a query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.to_pairs().join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Collects pairs that are already in wire form
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
