//! Rutas del recurso Van

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::van_controller::VanController;
use crate::dto::van_dto::{CreateVanRequest, UpdateVanRequest};
use crate::dto::ApiResponse;
use crate::models::Van;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_van_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_van))
        .route("/", get(list_vans))
        .route("/:id", get(get_van))
        .route("/:id", put(update_van))
        .route("/:id", delete(delete_van))
}

async fn create_van(
    State(state): State<AppState>,
    Json(request): Json<CreateVanRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Van>>), AppError> {
    let controller = VanController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_van(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Van>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let van = controller.get_by_id(id).await?;
    Ok(Json(van))
}

async fn list_vans(State(state): State<AppState>) -> Result<Json<Vec<Van>>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let vans = controller.list().await?;
    Ok(Json(vans))
}

async fn update_van(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVanRequest>,
) -> Result<Json<ApiResponse<Van>>, AppError> {
    let controller = VanController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_van(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VanController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Van deleted successfully"
    })))
}
