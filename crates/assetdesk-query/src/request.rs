//! Query request types.
//!
//! A [`QueryRequest`] is built once per list call with a fluent builder and is
//! read-only afterwards. Raw-string parsing (sort strings, dates) happens
//! here, before the pipeline runs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{QueryError, Result};
use crate::ordering::{Dir, SortKey};

/// Categorical and date filters of a request.
///
/// Which dimensions apply depends on the entity kind. A dimension the entity
/// does not have is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Accepted states. Absent, empty, or containing `"All"` disables it.
    pub states: Option<Vec<String>>,
    /// Accepted category names, with the same sentinel rule as `states`.
    pub categories: Option<Vec<String>>,
    /// Single user type. Absent, blank, or `"all"` disables it.
    pub user_type: Option<String>,
    /// Operating site. Enforced whenever present.
    pub location: Option<String>,
    /// Calendar day to match; the time of day is ignored.
    pub date: Option<DateTime<Utc>>,
}

impl Filters {
    /// Returns `true` if no dimension carries a value.
    pub fn is_empty(&self) -> bool {
        *self == Filters::default()
    }
}

/// Parameters of one list query.
///
/// # Example
///
/// ```
/// use assetdesk_query::{Dir, QueryRequest};
///
/// let request = QueryRequest::new()
///     .search("laptop")
///     .states(["Available", "Assigned"])
///     .location("HCM")
///     .sort("state:asc,assetcode:desc")
///     .page(2)
///     .per_page(5);
///
/// assert_eq!(request.search_term(), Some("laptop"));
/// assert_eq!(request.sort_keys()[1].dir, Dir::Desc);
/// assert_eq!(request.page_number(), 2);
/// assert_eq!(request.page_size(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    search_term: Option<String>,
    filters: Filters,
    sort_keys: Vec<SortKey>,
    page_number: i64,
    page_size: Option<i64>,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            search_term: None,
            filters: Filters::default(),
            sort_keys: Vec::new(),
            page_number: 1,
            page_size: None,
        }
    }
}

impl QueryRequest {
    /// Creates a request for the first page with nothing narrowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Sets the accepted states.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.states = Some(states.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the accepted category names.
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the user type filter.
    pub fn user_type(mut self, user_type: impl Into<String>) -> Self {
        self.filters.user_type = Some(user_type.into());
        self
    }

    /// Sets the location filter.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.filters.location = Some(location.into());
        self
    }

    /// Sets the date filter.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.filters.date = Some(date);
        self
    }

    /// Replaces all filters at once.
    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Appends a sort key.
    pub fn sort_by(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort_keys.push(SortKey::new(field, dir));
        self
    }

    /// Appends sort keys.
    pub fn order_by(mut self, keys: impl IntoIterator<Item = SortKey>) -> Self {
        self.sort_keys.extend(keys);
        self
    }

    /// Appends the keys of a `"field:dir,field:dir"` sort string.
    pub fn sort(self, keys: &str) -> Self {
        self.order_by(SortKey::parse_list(keys))
    }

    /// Sets the page number. Values below 1 are clamped when paging.
    pub fn page(mut self, page_number: i64) -> Self {
        self.page_number = page_number;
        self
    }

    /// Sets the page size. Values below 1 are clamped when paging.
    pub fn per_page(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// The search term as supplied, if any.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// The filters.
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// The sort keys, primary first.
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// The requested page number.
    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    /// The requested page size, if one was given.
    pub fn page_size(&self) -> Option<i64> {
        self.page_size
    }
}

/// Parses a date filter value.
///
/// Accepts a bare `YYYY-MM-DD` (taken as midnight UTC) or an RFC 3339
/// timestamp, which is converted to UTC.
///
/// ```
/// use assetdesk_query::parse_date;
///
/// let day = parse_date("2024-03-01").unwrap();
/// assert_eq!(day.to_rfc3339(), "2024-03-01T00:00:00+00:00");
/// assert!(parse_date("01/03/2024").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(day.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| QueryError::InvalidDate {
            value: value.to_string(),
        })
}
