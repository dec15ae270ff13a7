//! Operation response model

use serde::{Deserialize, Serialize};

/// Message used when a failure has no user-facing detail
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to complete the request, check the logs for details.";

/// Outcome of a mutating store operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResponse {
    pub success: bool,
    pub message: String,
}

impl OperationResponse {
    pub fn succeed(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Failure without a specific reason; the cause is only logged
    pub fn failed_generic() -> Self {
        Self::failed(GENERIC_FAILURE_MESSAGE)
    }
}
