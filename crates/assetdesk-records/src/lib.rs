//! Assetdesk Records - the record kinds served by the asset desk list
//! endpoints.
//!
//! Each kind ([`Asset`], [`User`], [`Assignment`], [`ReturnRequest`]) is a
//! plain serde struct with a static accessor table, so the generic pipeline
//! in `assetdesk_query` can run over it directly:
//!
//! ```rust
//! use assetdesk_query::QueryRequest;
//! use assetdesk_records::{execute, EntityKind, Record};
//!
//! let records: Vec<Record> = serde_json::from_str(r#"[
//!     {"kind": "asset", "id": 1, "code": "EL001", "name": "Laptop Dell",
//!      "state": "Available", "location": "HCM",
//!      "installedDate": "2024-01-01T00:00:00Z", "createdAt": "2024-01-01T00:00:00Z"},
//!     {"kind": "asset", "id": 2, "code": "EL002", "name": "Monitor",
//!      "state": "Available", "location": "HCM",
//!      "installedDate": "2024-01-01T00:00:00Z", "createdAt": "2024-01-01T00:00:00Z"}
//! ]"#).unwrap();
//!
//! let page = execute(EntityKind::Asset, &records, &QueryRequest::new().search("laptop"));
//! assert_eq!(page.total_items, 1);
//! assert_eq!(page.items[0].id(), 1);
//! ```
//!
//! # Field Keys
//!
//! | Kind | Search | Filters | Default order |
//! |------|--------|---------|---------------|
//! | asset | code, name | state, category, location | id |
//! | user | "First Last", "Last First", staff code | type, location | id |
//! | assignment | asset code, asset name, assignee | state, location, assigned date | assigned date |
//! | return-request | asset code, asset name, requester | state, location, returned date | returned date, missing first |

#[macro_use]
mod macros;

mod asset;
mod assignment;
mod error;
mod record;
mod return_request;
mod user;

use assetdesk_query::{execute_by, PagedResult, QueryConfig, QueryRequest, Queryable};
use tracing::warn;

pub use asset::{Asset, AssetState};
pub use assignment::{Assignment, AssignmentState};
pub use error::RecordError;
pub use record::{EntityKind, Record};
pub use return_request::{ReturnRequest, ReturnState};
pub use user::{User, UserType};

/// Runs a list query over records of `kind` with the default configuration.
pub fn execute<'a>(
    kind: EntityKind,
    source: &'a [Record],
    request: &QueryRequest,
) -> PagedResult<&'a Record> {
    execute_with(kind, source, request, &QueryConfig::default())
}

/// Runs a list query over records of `kind`.
///
/// Records of any other kind are skipped and reported with a warning.
pub fn execute_with<'a>(
    kind: EntityKind,
    source: &'a [Record],
    request: &QueryRequest,
    config: &QueryConfig,
) -> PagedResult<&'a Record> {
    let mismatched = source.iter().filter(|record| record.kind() != kind).count();
    if mismatched > 0 {
        warn!(%kind, mismatched, "skipping records of another kind");
    }

    match kind {
        EntityKind::Asset => execute_by(source, Record::as_asset, request, config),
        EntityKind::User => execute_by(source, Record::as_user, request, config),
        EntityKind::Assignment => execute_by(source, Record::as_assignment, request, config),
        EntityKind::ReturnRequest => {
            execute_by(source, Record::as_return_request, request, config)
        }
    }
}

/// Sortable and filterable keys of `kind`, identity first.
pub fn field_keys(kind: EntityKind) -> Vec<&'static str> {
    match kind {
        EntityKind::Asset => Asset::schema().keys().collect(),
        EntityKind::User => User::schema().keys().collect(),
        EntityKind::Assignment => Assignment::schema().keys().collect(),
        EntityKind::ReturnRequest => ReturnRequest::schema().keys().collect(),
    }
}
