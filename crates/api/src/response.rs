//! Shared response payloads for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` acknowledgment body used by the mutation
/// endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
