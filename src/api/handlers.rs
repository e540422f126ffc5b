//! HTTP request handlers

use super::types::{HistoryEntry, HistoryResponse, StartChatRequest};
use super::AppState;
use crate::chat::{AssistantResponse, ChatError};
use crate::runtime::{relay_message, HistoryStore};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::Instrument;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/start-chat", post(start_chat))
        .route("/history", get(get_history))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Chat
// ============================================================

/// Relay one message to the chat contract and wait for the reply.
///
/// Configuration is resolved before the body is looked at, so a missing
/// variable is reported even for an invalid request.
async fn start_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AssistantResponse>, AppError> {
    let contract = state.connector.connect().map_err(ChatError::from)?;

    let message = serde_json::from_slice::<StartChatRequest>(&body)
        .ok()
        .and_then(StartChatRequest::into_text)
        .ok_or_else(|| AppError::BadRequest("Message is required".to_string()))?;

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("start_chat", %request_id);

    let response = relay_message(state.context.clone(), contract, state.history.clone(), message)
        .instrument(span)
        .await?;

    Ok(Json(response))
}

// ============================================================
// History and version
// ============================================================

async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let messages = state.history.messages().await;
    Json(HistoryResponse {
        messages: messages.iter().map(HistoryEntry::from).collect(),
    })
}

async fn get_version() -> &'static str {
    concat!("oracle-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

/// Errors are returned as plain text; callers get no structured detail.
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        tracing::error!(error = %err, "Chat request failed");
        match err {
            ChatError::Configuration(config) => AppError::Internal(config.to_string()),
            ChatError::SessionIdNotFound => {
                AppError::Internal(ChatError::SessionIdNotFound.to_string())
            }
            _ => AppError::Internal("An error occurred".to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, message).into_response()
    }
}
