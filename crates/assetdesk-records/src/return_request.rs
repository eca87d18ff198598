//! Return request records.

use assetdesk_query::{Dir, Field, FilterBindings, Queryable, Schema, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

record_enum! {
    /// Progress of a return request.
    pub enum ReturnState("return state") {
        WaitingForReturning => "WaitingForReturning",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

/// A request to take an assigned asset back.
///
/// `accepted_by` and `returned_date` stay empty until an administrator
/// completes the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub id: i64,
    pub asset_code: String,
    pub asset_name: String,
    pub requested_by: String,
    #[serde(default)]
    pub accepted_by: Option<String>,
    pub assigned_date: DateTime<Utc>,
    #[serde(default)]
    pub returned_date: Option<DateTime<Utc>>,
    pub state: ReturnState,
    pub location: String,
}

fn id(r: &ReturnRequest) -> Value<'_> {
    Value::Integer(r.id)
}

fn asset_code(r: &ReturnRequest) -> Value<'_> {
    Value::text(&r.asset_code)
}

fn asset_name(r: &ReturnRequest) -> Value<'_> {
    Value::text(&r.asset_name)
}

fn requested_by(r: &ReturnRequest) -> Value<'_> {
    Value::text(&r.requested_by)
}

fn accepted_by(r: &ReturnRequest) -> Value<'_> {
    Value::opt_text(r.accepted_by.as_deref())
}

fn assigned_date(r: &ReturnRequest) -> Value<'_> {
    Value::timestamp(r.assigned_date)
}

fn returned_date(r: &ReturnRequest) -> Value<'_> {
    Value::opt_timestamp(r.returned_date)
}

fn state(r: &ReturnRequest) -> Value<'_> {
    Value::from_enum(&r.state)
}

fn location(r: &ReturnRequest) -> Value<'_> {
    Value::text(&r.location)
}

static SCHEMA: Schema<ReturnRequest> = Schema {
    entity: "return-request",
    identity: Field {
        key: "id",
        accessor: id,
    },
    fields: &[
        Field {
            key: "assetcode",
            accessor: asset_code,
        },
        Field {
            key: "assetname",
            accessor: asset_name,
        },
        Field {
            key: "requestedby",
            accessor: requested_by,
        },
        Field {
            key: "acceptedby",
            accessor: accepted_by,
        },
        Field {
            key: "assigneddate",
            accessor: assigned_date,
        },
        Field {
            key: "returneddate",
            accessor: returned_date,
        },
        Field {
            key: "state",
            accessor: state,
        },
        Field {
            key: "location",
            accessor: location,
        },
    ],
    default_order: &[("returneddate", Dir::Asc)],
    search: &["assetcode", "assetname", "requestedby"],
    filters: FilterBindings {
        state: Some("state"),
        location: Some("location"),
        date: Some("returneddate"),
        ..FilterBindings::NONE
    },
};

impl Queryable for ReturnRequest {
    fn schema() -> &'static Schema<Self> {
        &SCHEMA
    }
}
