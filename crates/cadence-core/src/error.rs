//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Business-logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No post with id {id}")]
    UnknownPost { id: PostId },

    #[error("No calendar has been generated")]
    NoCalendar,
}

/// Failures at the generation-gateway boundary.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request to provider failed: {0}")]
    Http(String),

    #[error("Provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned an empty completion")]
    Empty,

    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}
