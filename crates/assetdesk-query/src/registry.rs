//! Field accessor registry.
//!
//! Every record type describes itself with a static [`Schema`]: the keys a
//! client may sort or filter by, the accessor behind each key, which fields a
//! free-text search looks at, and which field each filter dimension targets.

use std::fmt;
use std::iter;

use crate::ordering::Dir;
use crate::value::Value;

/// Extracts one field value from a record.
pub type Accessor<T> = for<'a> fn(&'a T) -> Value<'a>;

/// A named accessor.
///
/// Keys are lowercase. Several keys may share an accessor (aliases).
pub struct Field<T> {
    /// Lowercase, user-facing key.
    pub key: &'static str,
    /// Function extracting the value.
    pub accessor: Accessor<T>,
}

impl<T> Field<T> {
    /// Reads this field from a record.
    pub fn value<'a>(&self, item: &'a T) -> Value<'a> {
        (self.accessor)(item)
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("key", &self.key).finish()
    }
}

/// Which field each filter dimension applies to.
///
/// `None` means the record type has no such dimension and requests that
/// carry it are not narrowed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterBindings {
    /// Multi-select state filter.
    pub state: Option<&'static str>,
    /// Multi-select category filter.
    pub category: Option<&'static str>,
    /// Single-value type filter.
    pub user_type: Option<&'static str>,
    /// Location filter (always enforced when supplied).
    pub location: Option<&'static str>,
    /// Calendar-day date filter.
    pub date: Option<&'static str>,
}

impl FilterBindings {
    /// No filter dimensions.
    pub const NONE: FilterBindings = FilterBindings {
        state: None,
        category: None,
        user_type: None,
        location: None,
        date: None,
    };
}

/// Static description of a queryable record type.
pub struct Schema<T: 'static> {
    /// Entity name used in logs and configuration (`"asset"`, `"user"`, ...).
    pub entity: &'static str,
    /// Stable identifier; unknown keys resolve to it.
    pub identity: Field<T>,
    /// All other sortable/filterable fields.
    pub fields: &'static [Field<T>],
    /// Ordering used when a request carries no sort keys.
    pub default_order: &'static [(&'static str, Dir)],
    /// Keys a free-text search matches against.
    pub search: &'static [&'static str],
    /// Filter dimension targets.
    pub filters: FilterBindings,
}

impl<T: 'static> Schema<T> {
    /// Finds the field registered under `key`, ignoring case and surrounding
    /// whitespace.
    pub fn lookup(&self, key: &str) -> Option<&Field<T>> {
        let key = key.trim();
        iter::once(&self.identity)
            .chain(self.fields.iter())
            .find(|field| field.key.eq_ignore_ascii_case(key))
    }

    /// Resolves `key` to a field, falling back to the identity field.
    pub fn resolve(&self, key: &str) -> &Field<T> {
        match self.lookup(key) {
            Some(field) => field,
            None => {
                tracing::trace!(
                    entity = self.entity,
                    key,
                    fallback = self.identity.key,
                    "unknown field key"
                );
                &self.identity
            }
        }
    }

    /// All registered keys, identity first.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        iter::once(self.identity.key).chain(self.fields.iter().map(|field| field.key))
    }
}

impl<T: 'static> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("entity", &self.entity)
            .field("identity", &self.identity)
            .field("fields", &self.fields)
            .field("default_order", &self.default_order)
            .field("search", &self.search)
            .field("filters", &self.filters)
            .finish()
    }
}
