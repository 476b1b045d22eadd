//! Error types for client construction and query validation.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by [`crate::client::Client`].
///
/// Validation failures short-circuit before any transport call is issued.
/// Transport failures pass through unchanged; they are never retried here.
#[derive(Debug, Error)]
pub enum Error {
    /// API key was empty at construction
    #[error("Received invalid API key")]
    InvalidApiKey,

    /// Congress outside the queryable range for the endpoint
    #[error("Received invalid congress: {0}")]
    InvalidCongress(i64),

    /// Not `"senate"` or `"house"`
    #[error("Received invalid chamber: {0}")]
    InvalidChamber(String),

    /// Not a recognized recent-bill recency filter
    #[error("Received invalid recent bill type: {0}")]
    InvalidRecentBillType(String),

    /// Not a recognized bill sub-resource
    #[error("Received invalid additional bill detail type: {0}")]
    InvalidBillDetailType(String),

    /// Not a recognized member-comparison dimension
    #[error("Received invalid member comparison type: {0}")]
    InvalidMemberComparisonType(String),

    /// Identifier does not match the house-resolution shape
    #[error("Received invalid bill ID: {0}")]
    InvalidBillId(String),

    /// Identifier does not match the bioguide shape
    #[error("Received invalid member ID: {0}")]
    InvalidMemberId(String),

    /// Offset is not a non-negative multiple of 20
    #[error("Received invalid offset: {0}")]
    InvalidOffset(i64),

    /// The transport collaborator failed; passed through verbatim
    #[error(transparent)]
    Transport(#[from] TransportError),
}
