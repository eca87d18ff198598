//! The polymorphic record and its kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::assignment::Assignment;
use crate::error::RecordError;
use crate::return_request::ReturnRequest;
use crate::user::User;

/// The four record kinds a list endpoint can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Asset,
    User,
    Assignment,
    ReturnRequest,
}

impl EntityKind {
    /// Every kind.
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Asset,
        EntityKind::User,
        EntityKind::Assignment,
        EntityKind::ReturnRequest,
    ];

    /// Kebab-case name, matching the schema entity names.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Asset => "asset",
            EntityKind::User => "user",
            EntityKind::Assignment => "assignment",
            EntityKind::ReturnRequest => "return-request",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = RecordError;

    /// Parses a kind ignoring case, `-` and `_`, so `ReturnRequest`,
    /// `return-request` and `return_request` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "asset" | "assets" => Ok(EntityKind::Asset),
            "user" | "users" => Ok(EntityKind::User),
            "assignment" | "assignments" => Ok(EntityKind::Assignment),
            "returnrequest" | "returnrequests" => Ok(EntityKind::ReturnRequest),
            _ => Err(RecordError::UnknownKind {
                value: s.to_string(),
            }),
        }
    }
}

/// One record of any kind, tagged by `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Record {
    Asset(Asset),
    User(User),
    Assignment(Assignment),
    ReturnRequest(ReturnRequest),
}

impl Record {
    /// The kind of this record.
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Asset(_) => EntityKind::Asset,
            Record::User(_) => EntityKind::User,
            Record::Assignment(_) => EntityKind::Assignment,
            Record::ReturnRequest(_) => EntityKind::ReturnRequest,
        }
    }

    /// Record identifier.
    pub fn id(&self) -> i64 {
        match self {
            Record::Asset(a) => a.id,
            Record::User(u) => u.id,
            Record::Assignment(a) => a.id,
            Record::ReturnRequest(r) => r.id,
        }
    }

    /// The asset, if this record is an asset.
    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            Record::Asset(a) => Some(a),
            _ => None,
        }
    }

    /// The user, if this record is an user.
    pub fn as_user(&self) -> Option<&User> {
        match self {
            Record::User(u) => Some(u),
            _ => None,
        }
    }

    /// The assignment, if this record is an assignment.
    pub fn as_assignment(&self) -> Option<&Assignment> {
        match self {
            Record::Assignment(a) => Some(a),
            _ => None,
        }
    }

    /// The return request, if this record is a return request.
    pub fn as_return_request(&self) -> Option<&ReturnRequest> {
        match self {
            Record::ReturnRequest(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Asset> for Record {
    fn from(asset: Asset) -> Self {
        Record::Asset(asset)
    }
}

impl From<User> for Record {
    fn from(user: User) -> Self {
        Record::User(user)
    }
}

impl From<Assignment> for Record {
    fn from(assignment: Assignment) -> Self {
        Record::Assignment(assignment)
    }
}

impl From<ReturnRequest> for Record {
    fn from(request: ReturnRequest) -> Self {
        Record::ReturnRequest(request)
    }
}
