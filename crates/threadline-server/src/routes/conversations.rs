use crate::error::ErrorResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use threadline::models::message::ConversationMessage;

#[derive(Debug, Serialize, Deserialize)]
struct AppendResponse {
    length: usize,
}

// Append one turn to the end of a conversation, creating it if needed
async fn append_message(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(message): Json<ConversationMessage>,
) -> impl IntoResponse {
    let mut conversations = state.conversations.write().await;
    let log = conversations.entry(conversation_id.clone()).or_default();
    log.push(message);
    tracing::debug!(conversation_id = %conversation_id, length = log.len(), "appended message");

    (
        StatusCode::CREATED,
        Json(AppendResponse { length: log.len() }),
    )
}

// The log, most recent turn first
async fn list_messages(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> impl IntoResponse {
    let conversations = state.conversations.read().await;
    let messages: Vec<ConversationMessage> = conversations
        .get(&conversation_id)
        .map(|log| log.snapshot())
        .unwrap_or_default();
    Json(messages)
}

async fn delete_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> impl IntoResponse {
    let removed = state.conversations.write().await.remove(&conversation_id);
    match removed {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Conversation '{}' not found", conversation_id),
            }),
        )
            .into_response(),
    }
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/conversations/:id/messages",
            post(append_message).get(list_messages),
        )
        .route("/conversations/:id", delete(delete_conversation))
        .with_state(state)
}
