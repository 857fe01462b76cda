//! Response payloads.

use serde::{Deserialize, Serialize};

/// Simple message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Builds a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of the login page, carrying any pending notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPageResponse {
    /// Pending one-shot notice, cleared by this read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Body of the AJAX logout endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// Whether a session was actually destroyed.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Where the client should navigate next.
    pub redirect_url: String,
}
