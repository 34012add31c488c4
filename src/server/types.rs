use crate::chat::ChatMessage;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Header under which the upstream authenticator forwards the caller's
/// identity claims as a JSON object.
pub const CLAIMS_HEADER: &str = "x-authorizer-claims";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope {
    pub success: bool,
    pub response: String,
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

/// Identity claims passed along by the upstream authenticator. Never
/// validated or enforced here; logging only.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizerClaims {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "cognito:username")]
    pub username: Option<String>,
}

impl AuthorizerClaims {
    /// Leniently parses the claims header; anything unreadable is treated
    /// as an anonymous request.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = headers.get(CLAIMS_HEADER)?.to_str().ok()?;
        serde_json::from_str(raw).ok()
    }

    pub fn display_name(&self) -> &str {
        self.email
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("unknown")
    }
}
