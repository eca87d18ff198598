//! Asset records.

use assetdesk_query::{Dir, Field, FilterBindings, Queryable, Schema, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

record_enum! {
    /// Lifecycle state of an asset.
    pub enum AssetState("asset state") {
        Available => "Available",
        NotAvailable => "NotAvailable",
        Assigned => "Assigned",
        WaitingForRecycling => "WaitingForRecycling",
        Recycled => "Recycled",
    }
}

/// A piece of equipment tracked by the desk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Name of the related category, when the join produced one.
    #[serde(default)]
    pub category: Option<String>,
    pub state: AssetState,
    pub location: String,
    pub installed_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Asset {
    /// Category name, or the empty string when the category is unresolved.
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

fn id(a: &Asset) -> Value<'_> {
    Value::Integer(a.id)
}

fn code(a: &Asset) -> Value<'_> {
    Value::text(&a.code)
}

fn name(a: &Asset) -> Value<'_> {
    Value::text(&a.name)
}

fn category(a: &Asset) -> Value<'_> {
    Value::text(a.category_name())
}

fn state(a: &Asset) -> Value<'_> {
    Value::from_enum(&a.state)
}

fn location(a: &Asset) -> Value<'_> {
    Value::text(&a.location)
}

fn installed(a: &Asset) -> Value<'_> {
    Value::timestamp(a.installed_date)
}

fn created(a: &Asset) -> Value<'_> {
    Value::timestamp(a.created_at)
}

fn updated(a: &Asset) -> Value<'_> {
    Value::opt_timestamp(a.updated_at)
}

static SCHEMA: Schema<Asset> = Schema {
    entity: "asset",
    identity: Field {
        key: "id",
        accessor: id,
    },
    fields: &[
        Field {
            key: "assetcode",
            accessor: code,
        },
        Field {
            key: "code",
            accessor: code,
        },
        Field {
            key: "assetname",
            accessor: name,
        },
        Field {
            key: "name",
            accessor: name,
        },
        Field {
            key: "category",
            accessor: category,
        },
        Field {
            key: "state",
            accessor: state,
        },
        Field {
            key: "location",
            accessor: location,
        },
        Field {
            key: "installeddate",
            accessor: installed,
        },
        Field {
            key: "created",
            accessor: created,
        },
        Field {
            key: "updated",
            accessor: updated,
        },
    ],
    default_order: &[("id", Dir::Asc)],
    search: &["assetcode", "assetname"],
    filters: FilterBindings {
        state: Some("state"),
        category: Some("category"),
        location: Some("location"),
        ..FilterBindings::NONE
    },
};

impl Queryable for Asset {
    fn schema() -> &'static Schema<Self> {
        &SCHEMA
    }
}
