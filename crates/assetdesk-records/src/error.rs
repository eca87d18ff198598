//! Error types for the records crate.

use thiserror::Error;

/// Errors that can occur when parsing record kinds and enum labels.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Entity kind that is none of asset, user, assignment or return request.
    #[error("unknown entity kind '{value}' (expected one of: asset, user, assignment, return-request)")]
    UnknownKind { value: String },

    /// Label that names no variant of the enum.
    #[error("unknown {kind} '{value}'")]
    UnknownLabel { kind: &'static str, value: String },
}
