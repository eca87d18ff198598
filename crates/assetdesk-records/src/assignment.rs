//! Assignment records.

use assetdesk_query::{Dir, Field, FilterBindings, Queryable, Schema, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

record_enum! {
    /// Progress of an assignment.
    pub enum AssignmentState("assignment state") {
        WaitingForAcceptance => "WaitingForAcceptance",
        Accepted => "Accepted",
        Declined => "Declined",
        WaitingForReturning => "WaitingForReturning",
        Returned => "Returned",
    }
}

/// An asset handed to a user.
///
/// Related names (`assigned_to`, `assigned_by`) are display names resolved
/// upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub asset_code: String,
    pub asset_name: String,
    pub assigned_to: String,
    pub assigned_by: String,
    pub assigned_date: DateTime<Utc>,
    pub state: AssignmentState,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn id(a: &Assignment) -> Value<'_> {
    Value::Integer(a.id)
}

fn asset_code(a: &Assignment) -> Value<'_> {
    Value::text(&a.asset_code)
}

fn asset_name(a: &Assignment) -> Value<'_> {
    Value::text(&a.asset_name)
}

fn assigned_to(a: &Assignment) -> Value<'_> {
    Value::text(&a.assigned_to)
}

fn assigned_by(a: &Assignment) -> Value<'_> {
    Value::text(&a.assigned_by)
}

fn assigned_date(a: &Assignment) -> Value<'_> {
    Value::timestamp(a.assigned_date)
}

fn state(a: &Assignment) -> Value<'_> {
    Value::from_enum(&a.state)
}

fn location(a: &Assignment) -> Value<'_> {
    Value::text(&a.location)
}

static SCHEMA: Schema<Assignment> = Schema {
    entity: "assignment",
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
            key: "assignedto",
            accessor: assigned_to,
        },
        Field {
            key: "assignedby",
            accessor: assigned_by,
        },
        Field {
            key: "assigneddate",
            accessor: assigned_date,
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
    default_order: &[("assigneddate", Dir::Asc)],
    search: &["assetcode", "assetname", "assignedto"],
    filters: FilterBindings {
        state: Some("state"),
        location: Some("location"),
        date: Some("assigneddate"),
        ..FilterBindings::NONE
    },
};

impl Queryable for Assignment {
    fn schema() -> &'static Schema<Self> {
        &SCHEMA
    }
}
