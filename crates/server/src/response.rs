//! Success bodies shared by the write endpoints.

use serde::Serialize;

/// `{ "message": "..." }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{ "id": N, "message": "..." }`, returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: &'static str,
}
