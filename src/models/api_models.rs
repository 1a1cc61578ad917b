use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Query string of the signup and unregister endpoints (`?email=...`).
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}
