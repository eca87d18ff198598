//! Assetdesk Query - list-query pipeline for in-memory record collections.
//!
//! Every list endpoint of the asset desk takes the same shape of request and
//! runs it through the same four stages:
//!
//! - **Search**: case-insensitive substring match against any searchable field
//! - **Filter**: categorical and date filters, AND across dimensions
//! - **Sort**: multi-key, stable, left-to-right tie-breaking
//! - **Paginate**: page slicing plus total/next/previous metadata
//!
//! Record types plug in by describing themselves with a static [`Schema`]:
//! a closed table from lowercase keys to accessor functions.
//!
//! # Quick Start
//!
//! ```rust
//! use assetdesk_query::{
//!     execute, Dir, Field, FilterBindings, QueryRequest, Queryable, Schema, Value,
//! };
//!
//! struct Monitor {
//!     id: i64,
//!     code: String,
//!     site: String,
//! }
//!
//! fn id(m: &Monitor) -> Value<'_> {
//!     Value::Integer(m.id)
//! }
//!
//! fn code(m: &Monitor) -> Value<'_> {
//!     Value::text(&m.code)
//! }
//!
//! fn site(m: &Monitor) -> Value<'_> {
//!     Value::text(&m.site)
//! }
//!
//! static MONITORS: Schema<Monitor> = Schema {
//!     entity: "monitor",
//!     identity: Field { key: "id", accessor: id },
//!     fields: &[
//!         Field { key: "code", accessor: code },
//!         Field { key: "site", accessor: site },
//!     ],
//!     default_order: &[("id", Dir::Asc)],
//!     search: &["code"],
//!     filters: FilterBindings { location: Some("site"), ..FilterBindings::NONE },
//! };
//!
//! impl Queryable for Monitor {
//!     fn schema() -> &'static Schema<Self> {
//!         &MONITORS
//!     }
//! }
//!
//! let monitors = vec![
//!     Monitor { id: 1, code: "MO000001".into(), site: "HN".into() },
//!     Monitor { id: 2, code: "MO000002".into(), site: "HCM".into() },
//!     Monitor { id: 3, code: "MO000003".into(), site: "HCM".into() },
//! ];
//!
//! let request = QueryRequest::new()
//!     .search("mo")
//!     .location("HCM")
//!     .sort("code:desc")
//!     .per_page(1);
//!
//! let page = execute(&monitors, &request);
//! assert_eq!(page.items[0].code, "MO000003");
//! assert_eq!(page.total_items, 2);
//! assert!(page.has_next_page);
//! ```
//!
//! # Ordering Semantics
//!
//! | Value | Ascending order |
//! |-------|-----------------|
//! | Text | Unicode lowercase, then ordinal |
//! | Integer, Timestamp | Natural |
//! | Enum | Declared rank |
//! | None | Before everything |
//!
//! Unknown sort keys resolve to the schema's identity field, and an empty
//! key list uses the schema's default ordering, so every request yields a
//! total, deterministic order.
//!
//! # Filter Semantics
//!
//! - State and category lists: absent, empty, or containing `"All"` disables
//!   the dimension; otherwise one entry must match (ignoring case)
//! - User type: absent, blank, or `"all"` (any case) disables it
//! - Location: always enforced when supplied
//! - Date: matches on the UTC calendar day; records without the date never match

mod clause;
mod config;
mod error;
mod ordering;
mod page;
mod pipeline;
mod registry;
mod request;
mod traits;
mod value;

// Re-export public API
pub use clause::{Clause, Op, Predicate, Selection};
pub use config::{QueryConfig, ALL_SENTINEL, DEFAULT_PAGE_SIZE, TYPE_SENTINEL};
pub use error::{QueryError, Result};
pub use ordering::{comparator, compare_values, Comparator, Dir, SortKey};
pub use page::{paginate, PageRequest, PagedResult};
pub use pipeline::{execute, execute_by, execute_with, filter_predicate, search_predicate};
pub use registry::{Accessor, Field, FilterBindings, Schema};
pub use request::{parse_date, Filters, QueryRequest};
pub use traits::{QueryEnum, Queryable};
pub use value::{Timestamp, Value};
