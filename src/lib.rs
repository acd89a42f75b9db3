//! Fleet Management Backend
//!
//! API REST para gestionar vans, operadores y la asignación entre ambos,
//! más un cliente de terminal para el registro de operadores.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod registry;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    // Sin CORS_ORIGINS configurado se permite cualquier origen (desarrollo);
    // con la lista presente, solo los orígenes declarados
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/assignments", routes::assignment_routes::create_assignment_router())
        .nest("/api/operators", routes::operator_routes::create_operator_router())
        .nest("/api/vans", routes::van_routes::create_van_router())
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-management",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
