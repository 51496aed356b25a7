/* src/server/adapter/axum/src/handler/health.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use super::AppState;

pub(super) async fn handle_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
  Json(serde_json::json!({ "status": "ok", "origin": state.urls.origin() }))
}
