//! Clause and predicate types.
//!
//! A [`Clause`] is one resolved test against one field. A [`Predicate`]
//! groups clauses: the search stage needs *any* of its clauses to hold, the
//! filter stage needs *all* of them.

use chrono::NaiveDate;

use crate::registry::Field;
use crate::value::Value;

/// Comparison operator of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Field text contains the operand, ignoring case.
    Contains,
    /// Field text equals one of the operands, ignoring case.
    OneOf,
    /// Field timestamp falls on the operand's calendar day.
    OnDay,
}

/// Owned operand stored in a clause.
///
/// Text operands are case-folded once when the clause is built.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operand {
    /// Substring to look for.
    Text(String),
    /// Accepted values.
    TextSet(Vec<String>),
    /// Calendar day.
    Day(NaiveDate),
}

/// A single test against one field of a record.
pub struct Clause<T> {
    field: Field<T>,
    operand: Operand,
}

impl<T> Clause<T> {
    /// Case-insensitive substring test.
    pub fn contains(field: Field<T>, needle: &str) -> Self {
        Clause {
            field,
            operand: Operand::Text(fold(needle)),
        }
    }

    /// Case-insensitive membership test.
    pub fn one_of<I, S>(field: Field<T>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Clause {
            field,
            operand: Operand::TextSet(values.into_iter().map(|v| fold(v.as_ref())).collect()),
        }
    }

    /// Calendar-day test.
    pub fn on_day(field: Field<T>, day: NaiveDate) -> Self {
        Clause {
            field,
            operand: Operand::Day(day),
        }
    }

    /// The key of the field this clause reads.
    pub fn field_key(&self) -> &'static str {
        self.field.key
    }

    /// The clause operator.
    pub fn op(&self) -> Op {
        match self.operand {
            Operand::Text(_) => Op::Contains,
            Operand::TextSet(_) => Op::OneOf,
            Operand::Day(_) => Op::OnDay,
        }
    }

    /// Evaluates this clause against a record.
    pub fn matches(&self, item: &T) -> bool {
        self.matches_value(&self.field.value(item))
    }

    /// Evaluates this clause against an already extracted value.
    ///
    /// Missing values never match, and neither do values of a kind the
    /// operator cannot inspect.
    pub fn matches_value(&self, value: &Value<'_>) -> bool {
        match (&self.operand, value) {
            (_, Value::None) => false,
            (Operand::Text(needle), value) => value
                .as_text()
                .is_some_and(|text| fold(text).contains(needle.as_str())),
            (Operand::TextSet(accepted), value) => value.as_text().is_some_and(|text| {
                let text = fold(text);
                accepted.iter().any(|candidate| *candidate == text)
            }),
            (Operand::Day(day), Value::Timestamp(at)) => at.day() == *day,
            (Operand::Day(_), _) => false,
        }
    }
}

impl<T> std::fmt::Debug for Clause<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clause")
            .field("field", &self.field.key)
            .field("operand", &self.operand)
            .finish()
    }
}

/// Locale-independent case folding.
fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// A group of clauses with fixed combination semantics.
#[derive(Debug)]
pub enum Predicate<T> {
    /// Matches every record.
    Always,
    /// Matches when at least one clause matches.
    Any(Vec<Clause<T>>),
    /// Matches when every clause matches.
    All(Vec<Clause<T>>),
}

impl<T> Predicate<T> {
    /// Tests a record.
    pub fn matches(&self, item: &T) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Any(clauses) => clauses.iter().any(|clause| clause.matches(item)),
            Predicate::All(clauses) => clauses.iter().all(|clause| clause.matches(item)),
        }
    }

    /// Returns `true` if this predicate lets everything through.
    pub fn is_always(&self) -> bool {
        matches!(self, Predicate::Always)
    }

    /// The clauses of this predicate (empty for [`Predicate::Always`]).
    pub fn clauses(&self) -> &[Clause<T>] {
        match self {
            Predicate::Always => &[],
            Predicate::Any(clauses) | Predicate::All(clauses) => clauses,
        }
    }
}

/// How a multi-select filter dimension narrows results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The dimension is disabled.
    Any,
    /// The field must equal one of these values (case-insensitively).
    OneOf(Vec<String>),
}

impl Selection {
    /// Interprets a multi-select list.
    ///
    /// Absent, empty, or containing `sentinel` (exact spelling) disables the
    /// dimension.
    pub fn from_list(values: Option<&[String]>, sentinel: &str) -> Self {
        match values {
            Some(values) if !values.is_empty() && !values.iter().any(|v| v == sentinel) => {
                Selection::OneOf(values.to_vec())
            }
            _ => Selection::Any,
        }
    }

    /// Interprets a single-value filter.
    ///
    /// Absent, blank, or equal to `sentinel` ignoring case disables the
    /// dimension.
    pub fn from_single(value: Option<&str>, sentinel: &str) -> Self {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() && !value.eq_ignore_ascii_case(sentinel) => {
                Selection::OneOf(vec![value.to_string()])
            }
            _ => Selection::Any,
        }
    }
}
