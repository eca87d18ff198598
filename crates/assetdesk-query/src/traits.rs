//! Traits that plug record types into the engine.
//!
//! A record type becomes queryable by pointing at its static [`Schema`]; an
//! enum becomes usable as a field value by implementing [`QueryEnum`].

use crate::registry::Schema;

/// Trait for record types the pipeline can search, filter, sort and page.
///
/// Implementations return a `static` schema table, so resolving a key never
/// allocates and the set of keys is closed and enumerable.
///
/// # Example
///
/// ```
/// use assetdesk_query::{Dir, Field, FilterBindings, Queryable, Schema, Value};
///
/// struct Laptop {
///     id: i64,
///     code: String,
/// }
///
/// fn id(item: &Laptop) -> Value<'_> {
///     Value::Integer(item.id)
/// }
///
/// fn code(item: &Laptop) -> Value<'_> {
///     Value::text(&item.code)
/// }
///
/// static LAPTOPS: Schema<Laptop> = Schema {
///     entity: "laptop",
///     identity: Field { key: "id", accessor: id },
///     fields: &[Field { key: "code", accessor: code }],
///     default_order: &[("id", Dir::Asc)],
///     search: &["code"],
///     filters: FilterBindings::NONE,
/// };
///
/// impl Queryable for Laptop {
///     fn schema() -> &'static Schema<Self> {
///         &LAPTOPS
///     }
/// }
///
/// assert_eq!(Laptop::schema().resolve("CODE").key, "code");
/// ```
pub trait Queryable: Sized + 'static {
    /// Returns the field table for this record type.
    fn schema() -> &'static Schema<Self>;
}

/// Helper trait for enums exposed as field values.
///
/// `rank` must be stable: it is the sort order of the enum. `label` is what
/// filters and search terms are matched against, case-insensitively.
pub trait QueryEnum {
    /// Position of this variant in ascending order.
    fn rank(&self) -> u32;

    /// User-facing name of this variant.
    fn label(&self) -> &'static str;
}
