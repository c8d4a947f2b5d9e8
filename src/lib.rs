pub mod config;
pub mod db;
pub mod demo;
pub mod errors;
pub mod models;
pub mod routes;
pub mod seed;
pub mod swagger;
pub mod test_utils;

#[cfg(test)]
mod tests;

use axum::{extract::State, routing::get, Json, Router};
use config::Config;
use db::Database;
use errors::ApiError;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

/// Health check endpoint for monitoring; pings the database
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .db
        .ping()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("{:#}", e)))?;
    Ok(Json(serde_json::json!({
        "status": "ok",
        "database": state.config.database_name,
        "collection": state.config.collection_name,
    })))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Full application router, shared by the server binary and the tests.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/employees", routes::employees::router())
        .merge(swagger::create_swagger_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
