use thiserror::Error;

use super::config::MAX_CYLINDER;

/// Simulation error types
#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("{0} does not take a direction")]
    UnexpectedDirection(&'static str),

    #[error("No requests to schedule")]
    NoRequests,

    #[error("Reference string is empty")]
    NoReferences,

    #[error("Frame capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

/// Rejections produced while parsing user-entered workloads.
///
/// The display text is the message shown back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter at least one request position")]
    EmptyRequests,

    #[error("Please enter an initial head position")]
    EmptyHead,

    #[error("Initial head position must be a number")]
    HeadNotANumber,

    #[error("All requests must be valid numbers")]
    RequestNotANumber,

    #[error("Initial position must be between 0 and {}", MAX_CYLINDER)]
    HeadOutOfRange,

    #[error("All requests must be between 0 and {}", MAX_CYLINDER)]
    RequestOutOfRange,

    #[error("Please enter at least one page reference")]
    EmptyReferences,

    #[error("All page references must be valid numbers")]
    ReferenceNotANumber,

    #[error("Frame capacity must be a positive number")]
    InvalidCapacity,
}

pub type Result<T> = std::result::Result<T, SimError>;
