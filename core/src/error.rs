//! Error types for the todo resource.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the transport layer maps it
//! to a distinct status code, and callers frequently distinguish "the
//! resource does not exist" from "the payload was bad." Validation failures
//! carry the exact reason string returned to the caller; store failures are
//! wrapped so a read failing can never be mistaken for a missing item.

use thiserror::Error;

/// Failure of an underlying store operation (I/O, throttling, outage).
///
/// The handler never retries these; they abort the current operation and
/// surface as a 500-class failure at the transport boundary.
#[derive(Debug, Clone, Error)]
#[error("store operation failed: {0}")]
pub struct StoreError(pub String);

/// Errors surfaced by the resource handler.
///
/// The `Display` output of each variant is the plain-text reason the
/// transport layer returns in the response body.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The request body was not parsable JSON. Uniform across all write
    /// operations and distinct from field-level validation failures.
    #[error("Invalid JSON body")]
    MalformedPayload,

    /// The payload failed a field rule. Caller-correctable, never retried.
    #[error("{0}")]
    Validation(&'static str),

    /// The operation targeted an id with no stored item.
    #[error("Todo not found.")]
    NotFound,

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
