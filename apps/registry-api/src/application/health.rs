use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::warn;

use crate::AppState;

// GET /api/health
pub async fn handle_health(State(app_state): State<AppState>) -> impl IntoResponse {
    let Some(pool) = app_state.pg_pool.as_ref() else {
        return (
            StatusCode::OK,
            Json(json!({"status": "ok", "store": "memory"})),
        );
    };

    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({"status": "ok", "store": "postgres"})),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "degraded", "store": "postgres", "error": e.to_string()})),
            )
        }
    }
}
