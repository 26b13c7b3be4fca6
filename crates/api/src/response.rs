//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` body for operations that return no entity.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
