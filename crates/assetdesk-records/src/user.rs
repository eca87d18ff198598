//! User records.

use assetdesk_query::{Dir, Field, FilterBindings, Queryable, Schema, Value};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

record_enum! {
    /// Role of a user account.
    pub enum UserType("user type") {
        Admin => "Admin",
        Staff => "Staff",
    }
}

/// A staff member or administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub staff_code: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub location: String,
    pub joined_date: DateTime<Utc>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Last First". Searches match either order.
    pub fn reversed_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

fn id(u: &User) -> Value<'_> {
    Value::Integer(u.id)
}

fn staff_code(u: &User) -> Value<'_> {
    Value::text(&u.staff_code)
}

fn first_name(u: &User) -> Value<'_> {
    Value::text(&u.first_name)
}

fn last_name(u: &User) -> Value<'_> {
    Value::text(&u.last_name)
}

fn full_name(u: &User) -> Value<'_> {
    Value::owned(u.full_name())
}

fn reversed_name(u: &User) -> Value<'_> {
    Value::owned(u.reversed_name())
}

fn username(u: &User) -> Value<'_> {
    Value::text(&u.username)
}

fn user_type(u: &User) -> Value<'_> {
    Value::from_enum(&u.user_type)
}

fn location(u: &User) -> Value<'_> {
    Value::text(&u.location)
}

fn joined(u: &User) -> Value<'_> {
    Value::timestamp(u.joined_date)
}

fn date_of_birth(u: &User) -> Value<'_> {
    Value::opt_timestamp(
        u.date_of_birth
            .map(|day| day.and_time(NaiveTime::MIN).and_utc()),
    )
}

fn created(u: &User) -> Value<'_> {
    Value::timestamp(u.created_at)
}

static SCHEMA: Schema<User> = Schema {
    entity: "user",
    identity: Field {
        key: "id",
        accessor: id,
    },
    fields: &[
        Field {
            key: "staffcode",
            accessor: staff_code,
        },
        Field {
            key: "firstname",
            accessor: first_name,
        },
        Field {
            key: "lastname",
            accessor: last_name,
        },
        Field {
            key: "fullname",
            accessor: full_name,
        },
        Field {
            key: "name",
            accessor: full_name,
        },
        Field {
            key: "reversedname",
            accessor: reversed_name,
        },
        Field {
            key: "username",
            accessor: username,
        },
        Field {
            key: "type",
            accessor: user_type,
        },
        Field {
            key: "location",
            accessor: location,
        },
        Field {
            key: "joined",
            accessor: joined,
        },
        Field {
            key: "joineddate",
            accessor: joined,
        },
        Field {
            key: "dateofbirth",
            accessor: date_of_birth,
        },
        Field {
            key: "created",
            accessor: created,
        },
    ],
    default_order: &[("id", Dir::Asc)],
    search: &["fullname", "reversedname", "staffcode"],
    filters: FilterBindings {
        user_type: Some("type"),
        location: Some("location"),
        ..FilterBindings::NONE
    },
};

impl Queryable for User {
    fn schema() -> &'static Schema<Self> {
        &SCHEMA
    }
}
