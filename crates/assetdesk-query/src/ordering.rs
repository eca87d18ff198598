//! Ordering types for query result sorting.
//!
//! Provides [`Dir`] for sort direction, [`SortKey`] for a client-supplied
//! `(field, direction)` pair, and [`Comparator`] which folds a list of keys
//! into a single comparison with left-to-right tie-breaking.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::registry::Field;
use crate::traits::Queryable;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Parses a client-supplied direction.
    ///
    /// Only `"desc"` (any case) is descending; anything else, including
    /// typos and the empty string, is ascending.
    pub fn parse_lenient(s: &str) -> Dir {
        if s.trim().eq_ignore_ascii_case("desc") {
            Dir::Desc
        } else {
            Dir::Asc
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single sort key: a field name and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// The field to sort by, as the client spelled it.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl SortKey {
    /// Creates a new ascending key for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        SortKey {
            field: field.into(),
            dir: Dir::Asc,
        }
    }

    /// Creates a new descending key for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        SortKey {
            field: field.into(),
            dir: Dir::Desc,
        }
    }

    /// Creates a new key with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortKey {
            field: field.into(),
            dir,
        }
    }

    /// Splits a sort string such as `"state:asc,assetcode:desc"`.
    ///
    /// Blank segments are skipped and a missing direction means ascending.
    ///
    /// ```
    /// use assetdesk_query::{Dir, SortKey};
    ///
    /// let keys = SortKey::parse_list("state:asc, assetcode:DESC,,name");
    /// assert_eq!(keys, vec![
    ///     SortKey::new("state", Dir::Asc),
    ///     SortKey::new("assetcode", Dir::Desc),
    ///     SortKey::new("name", Dir::Asc),
    /// ]);
    /// ```
    pub fn parse_list(s: &str) -> Vec<SortKey> {
        s.split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once(':') {
                Some((field, dir)) => SortKey::new(field.trim(), Dir::parse_lenient(dir)),
                None => SortKey::asc(segment),
            })
            .collect()
    }
}

/// Compares two values read from the same field.
///
/// `None` is the minimum of every type, so ascending puts missing values
/// first and descending puts them last. Text compares case-insensitively,
/// with an ordinal tie-break so distinct strings never compare equal.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::None, Value::None) => Ordering::Equal,
        (Value::None, _) => Ordering::Less,
        (_, Value::None) => Ordering::Greater,

        (Value::Text(a), Value::Text(b)) => compare_text(a, b),
        (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Enum { rank: a, .. }, Value::Enum { rank: b, .. }) => a.cmp(b),

        // One accessor always yields one variant
        _ => Ordering::Equal,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

/// A resolved multi-key comparison for one record type.
///
/// The first key is primary; each following key only breaks ties left by the
/// ones before it.
pub struct Comparator<T> {
    keys: Vec<(Field<T>, Dir)>,
}

impl<T: Queryable> Comparator<T> {
    /// Resolves `keys` against the record type's schema.
    ///
    /// An empty list uses the schema's default ordering. Unknown keys resolve
    /// to the identity field, so the comparator is total for any input.
    pub fn new(keys: &[SortKey]) -> Self {
        let schema = T::schema();
        let keys = if keys.is_empty() {
            schema
                .default_order
                .iter()
                .map(|(key, dir)| (*schema.resolve(key), *dir))
                .collect()
        } else {
            keys.iter()
                .map(|key| (*schema.resolve(&key.field), key.dir))
                .collect()
        };
        Comparator { keys }
    }
}

impl<T> Comparator<T> {
    /// Compares two records.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for (field, dir) in &self.keys {
            let ordering = dir.apply(compare_values(&field.value(a), &field.value(b)));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// The resolved keys, primary first.
    pub fn keys(&self) -> impl Iterator<Item = (&'static str, Dir)> + '_ {
        self.keys.iter().map(|(field, dir)| (field.key, *dir))
    }

    /// Stable-sorts records in place.
    pub fn sort(&self, items: &mut [&T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

/// Builds the comparator for `keys`; see [`Comparator::new`].
pub fn comparator<T: Queryable>(keys: &[SortKey]) -> Comparator<T> {
    Comparator::new(keys)
}
