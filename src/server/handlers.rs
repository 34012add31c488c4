use super::types::{AuthorizerClaims, ChatRequest, ErrorEnvelope, SuccessEnvelope};
use crate::{
    Error, Result,
    relay::{ChatReply, Relay},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// Headers carried by every response, success or failure.
fn relay_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        ),
        (
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static(
                "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
            ),
        ),
        (
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("OPTIONS,POST"),
        ),
    ]
}

/// The body is taken raw and parsed here rather than through the `Json`
/// extractor, so malformed input still produces the JSON envelope
/// instead of a framework rejection.
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(claims) = AuthorizerClaims::from_headers(&headers) {
        info!("Authenticated user: {}", claims.display_name());
    }

    match process(&state, &body).await {
        Ok(reply) => {
            info!("Successfully relayed chat turn");
            (
                StatusCode::OK,
                relay_headers(),
                Json(SuccessEnvelope {
                    success: true,
                    response: reply.response,
                    conversation_history: reply.conversation_history,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to relay chat turn: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                relay_headers(),
                Json(ErrorEnvelope {
                    success: false,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn process(state: &AppState, body: &Bytes) -> Result<ChatReply> {
    let request: ChatRequest =
        serde_json::from_slice(body).map_err(|e| Error::malformed(e.to_string()))?;

    state
        .relay
        .handle(request.message, request.conversation_history)
        .await
}
