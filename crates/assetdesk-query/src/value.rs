//! Runtime value types for field comparison.
//!
//! The [`Value`] enum is what an accessor hands back when the engine asks a
//! record for one of its fields. Search and filter clauses inspect it, and the
//! comparator orders records by it.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};

use crate::traits::QueryEnum;

/// Runtime value for comparison, usually borrowed from the source record.
///
/// Composite fields (a user's full name, for instance) are assembled on the
/// fly and carried as [`Cow::Owned`].
///
/// # Example
///
/// ```
/// use assetdesk_query::Value;
///
/// struct Laptop {
///     code: String,
///     owner: Option<String>,
/// }
///
/// fn code(item: &Laptop) -> Value<'_> {
///     Value::text(&item.code)
/// }
///
/// fn owner(item: &Laptop) -> Value<'_> {
///     Value::opt_text(item.owner.as_deref())
/// }
///
/// let laptop = Laptop { code: "LA000001".into(), owner: None };
/// assert_eq!(code(&laptop).as_text(), Some("LA000001"));
/// assert!(owner(&laptop).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text value.
    Text(Cow<'a, str>),
    /// Integer value (identifiers, counters).
    Integer(i64),
    /// Point in time.
    Timestamp(Timestamp),
    /// Enum variant: `rank` drives ordering, `label` drives matching.
    Enum { rank: u32, label: &'static str },
    /// Field absent or null. Sorts before every other value.
    None,
}

impl<'a> Value<'a> {
    /// Borrowed text value.
    pub fn text(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }

    /// Owned text value, for fields composed at access time.
    pub fn owned(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }

    /// Text value, or [`Value::None`] when absent.
    pub fn opt_text(s: Option<&'a str>) -> Self {
        s.map_or(Value::None, Value::text)
    }

    /// Timestamp value.
    pub fn timestamp(at: DateTime<Utc>) -> Self {
        Value::Timestamp(Timestamp(at))
    }

    /// Timestamp value, or [`Value::None`] when absent.
    pub fn opt_timestamp(at: Option<DateTime<Utc>>) -> Self {
        at.map_or(Value::None, Value::timestamp)
    }

    /// Enum value taken from a [`QueryEnum`] implementation.
    pub fn from_enum<E: QueryEnum>(variant: &E) -> Self {
        Value::Enum {
            rank: variant.rank(),
            label: variant.label(),
        }
    }

    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns the textual form used by text clauses.
    ///
    /// Enums expose their label; numbers and timestamps have no textual form.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_ref()),
            Value::Enum { label, .. } => Some(label),
            _ => None,
        }
    }
}

/// A UTC point in time.
///
/// Date filters work at calendar-day granularity, see [`Timestamp::day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// The calendar day (UTC) this timestamp falls on.
    pub fn day(self) -> NaiveDate {
        self.0.date_naive()
    }
}
