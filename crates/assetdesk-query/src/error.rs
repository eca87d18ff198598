//! Error types for the query crate.
//!
//! The pipeline itself is total. Errors only arise while turning raw client
//! input into a [`QueryRequest`](crate::QueryRequest).

use thiserror::Error;

/// Errors that can occur when parsing query parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A date filter value that is neither `YYYY-MM-DD` nor RFC 3339.
    #[error("invalid date '{value}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate { value: String },
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
