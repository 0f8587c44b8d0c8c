use crate::error::DataError;
use chrono::NaiveDateTime;
use serde::de::{DeserializeSeed, Deserializer};
use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 20;

/// Page-size limits applied when binding request parameters.
///
/// Loaded from the `pagination` section of a YAML config file:
///
/// ```yaml
/// pagination:
///   default_page_size: 25
///   max_page_size: 100
/// ```
///
/// Plain `Deserialize` binds against the default limits. To bind against
/// configured ones, use the limits as a [`DeserializeSeed`]:
///
/// ```
/// use paged_list::{PagingLimits, QueryStringParameters};
/// use serde::de::DeserializeSeed;
///
/// let limits = PagingLimits { default_page_size: 25, max_page_size: 100 };
/// let mut json = serde_json::Deserializer::from_str(r#"{"pageSize": 50}"#);
/// let params: QueryStringParameters = limits.deserialize(&mut json).unwrap();
/// assert_eq!(params.page_size(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagingLimits {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for PagingLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl PagingLimits {
    /// Read the `pagination` section of a YAML document. A document without
    /// that section yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DataError> {
        let doc: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| DataError::Config(e.to_string()))?;
        match doc.get("pagination") {
            Some(section) => serde_yaml::from_value(section.clone())
                .map_err(|e| DataError::Config(format!("pagination: {e}"))),
            None => Ok(Self::default()),
        }
    }
}

impl<'de> DeserializeSeed<'de> for PagingLimits {
    type Value = QueryStringParameters;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        let raw = RawQueryStringParameters::deserialize(deserializer)?;
        Ok(QueryStringParameters::bind(raw, self))
    }
}

/// Caller-supplied filter and paging intent, typically bound from a query string.
///
/// Values are normalized on the way in:
/// - `query`: empty or whitespace-only text becomes `None`
/// - `page_size`: clamped from above to `max_page_size` (20 by default); zero
///   and negative values pass through
/// - `page_number`: defaults to 1
///
/// Deserialization goes through the same setters, with `q` as the wire name
/// of the query and `pageSize` / `pageNumber` for the paging fields. Concrete
/// request types embed it with `#[serde(flatten)]` and expose it through
/// [`HasQueryParameters`].
///
/// # Example
///
/// ```
/// use paged_list::QueryStringParameters;
///
/// let mut params = QueryStringParameters::default();
/// params.set_query(Some("   ".into()));
/// params.set_page_size(50);
/// assert_eq!(params.query(), None);
/// assert_eq!(params.page_size(), 20);
/// assert_eq!(params.page_number(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawQueryStringParameters")]
pub struct QueryStringParameters {
    query: Option<String>,
    page_size: i64,
    page_number: i64,
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
    limits: PagingLimits,
}

impl Default for QueryStringParameters {
    fn default() -> Self {
        Self::with_limits(PagingLimits::default())
    }
}

impl QueryStringParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: PagingLimits) -> Self {
        Self {
            query: None,
            page_size: limits.default_page_size.min(limits.max_page_size),
            page_number: 1,
            from: None,
            to: None,
            limits,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn set_query(&mut self, query: Option<String>) {
        self.query = query.filter(|q| !q.trim().is_empty());
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        self.page_size = page_size.min(self.limits.max_page_size);
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn set_page_number(&mut self, page_number: i64) {
        self.page_number = page_number;
    }

    pub fn date_from(&self) -> Option<NaiveDateTime> {
        self.from
    }

    pub fn set_date_from(&mut self, from: Option<NaiveDateTime>) {
        self.from = from;
    }

    pub fn date_to(&self) -> Option<NaiveDateTime> {
        self.to
    }

    pub fn set_date_to(&mut self, to: Option<NaiveDateTime>) {
        self.to = to;
    }

    pub fn limits(&self) -> PagingLimits {
        self.limits
    }

    fn bind(raw: RawQueryStringParameters, limits: PagingLimits) -> Self {
        let mut params = Self::with_limits(limits);
        params.set_query(raw.query);
        if let Some(page_size) = raw.page_size {
            params.set_page_size(page_size);
        }
        if let Some(page_number) = raw.page_number {
            params.set_page_number(page_number);
        }
        params.set_date_from(raw.from);
        params.set_date_to(raw.to);
        params
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQueryStringParameters {
    #[serde(rename = "q")]
    query: Option<String>,
    page_size: Option<i64>,
    page_number: Option<i64>,
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
}

impl From<RawQueryStringParameters> for QueryStringParameters {
    fn from(raw: RawQueryStringParameters) -> Self {
        QueryStringParameters::bind(raw, PagingLimits::default())
    }
}

/// Implemented by concrete request types that carry [`QueryStringParameters`].
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct ArticleQuery {
///     #[serde(flatten)]
///     paging: QueryStringParameters,
///     author: Option<String>,
/// }
///
/// impl HasQueryParameters for ArticleQuery {
///     fn parameters(&self) -> &QueryStringParameters { &self.paging }
/// }
/// ```
pub trait HasQueryParameters {
    fn parameters(&self) -> &QueryStringParameters;

    fn page_number(&self) -> i64 {
        self.parameters().page_number()
    }

    fn page_size(&self) -> i64 {
        self.parameters().page_size()
    }
}

impl HasQueryParameters for QueryStringParameters {
    fn parameters(&self) -> &QueryStringParameters {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = QueryStringParameters::new();
        assert_eq!(params.query(), None);
        assert_eq!(params.page_size(), 10);
        assert_eq!(params.page_number(), 1);
        assert_eq!(params.date_from(), None);
        assert_eq!(params.date_to(), None);
    }

    #[test]
    fn test_blank_query_is_absent() {
        let mut params = QueryStringParameters::new();
        params.set_query(Some(String::new()));
        assert_eq!(params.query(), None);
        params.set_query(Some(" \t ".into()));
        assert_eq!(params.query(), None);
        params.set_query(Some(" rust ".into()));
        assert_eq!(params.query(), Some(" rust "));
    }

    #[test]
    fn test_page_size_clamped_from_above_only() {
        let mut params = QueryStringParameters::new();
        params.set_page_size(50);
        assert_eq!(params.page_size(), 20);
        params.set_page_size(20);
        assert_eq!(params.page_size(), 20);
        params.set_page_size(0);
        assert_eq!(params.page_size(), 0);
        params.set_page_size(-4);
        assert_eq!(params.page_size(), -4);
    }

    #[test]
    fn test_custom_limits() {
        let limits = PagingLimits {
            default_page_size: 25,
            max_page_size: 100,
        };
        let mut params = QueryStringParameters::with_limits(limits);
        assert_eq!(params.page_size(), 25);
        params.set_page_size(500);
        assert_eq!(params.page_size(), 100);
    }

    #[test]
    fn test_default_page_size_clamped_to_max() {
        let limits = PagingLimits {
            default_page_size: 50,
            max_page_size: 20,
        };
        let params = QueryStringParameters::with_limits(limits);
        assert_eq!(params.page_size(), 20);
    }

    #[test]
    fn test_limits_from_yaml() {
        let yaml = "app:\n  name: demo\npagination:\n  max_page_size: 50\n";
        let limits = PagingLimits::from_yaml_str(yaml).unwrap();
        assert_eq!(limits.max_page_size, 50);
        assert_eq!(limits.default_page_size, 10);
    }

    #[test]
    fn test_limits_from_yaml_without_section() {
        let limits = PagingLimits::from_yaml_str("app:\n  name: demo\n").unwrap();
        assert_eq!(limits, PagingLimits::default());
    }

    #[test]
    fn test_limits_from_invalid_yaml() {
        let err = PagingLimits::from_yaml_str("pagination:\n  max_page_size: lots\n").unwrap_err();
        assert!(matches!(err, DataError::Config(_)));
    }
}
