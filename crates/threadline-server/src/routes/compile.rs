use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use threadline::models::item::RequestItem;

#[derive(Debug, Default, Deserialize)]
struct CompileRequest {
    /// Overrides the configured budget for this call
    #[serde(default)]
    budget: Option<i64>,
}

#[derive(Debug, Serialize)]
struct CompileResponse {
    items: Vec<RequestItem>,
}

async fn compile_handler(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    request: Option<Json<CompileRequest>>,
) -> Result<Json<CompileResponse>, ApiError> {
    // A missing body compiles with the configured budget
    let budget = request.and_then(|Json(request)| request.budget);
    let context = state.context(&conversation_id, budget);
    let items = state.compiler.compile(&context).await?;

    tracing::debug!(
        conversation_id = %conversation_id,
        items = items.len(),
        "compiled conversation"
    );
    Ok(Json(CompileResponse { items }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/conversations/:id/compile", post(compile_handler))
        .with_state(state)
}
