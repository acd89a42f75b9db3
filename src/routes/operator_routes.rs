//! Rutas del recurso Operator
//!
//! El "delete" de la colección archiva al operador (borrado lógico); la fila
//! se conserva con archived = TRUE.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::operator_controller::OperatorController;
use crate::dto::operator_dto::{
    ArchiveOperatorRequest, RegisterOperatorRequest, UpdateOperatorRequest,
};
use crate::dto::ApiResponse;
use crate::models::Operator;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_operator_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_operators))
        .route("/", post(register_operator))
        .route("/:id", put(update_operator))
        .route("/", delete(archive_operator))
}

async fn list_operators(
    State(state): State<AppState>,
) -> Result<Json<Vec<Operator>>, AppError> {
    let controller = OperatorController::new(state.pool.clone());
    let operators = controller.list().await?;
    Ok(Json(operators))
}

async fn register_operator(
    State(state): State<AppState>,
    Json(request): Json<RegisterOperatorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Operator>>), AppError> {
    let controller = OperatorController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_operator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateOperatorRequest>,
) -> Result<Json<ApiResponse<Operator>>, AppError> {
    let controller = OperatorController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn archive_operator(
    State(state): State<AppState>,
    Json(request): Json<ArchiveOperatorRequest>,
) -> Result<Json<ApiResponse<Operator>>, AppError> {
    let controller = OperatorController::new(state.pool.clone());
    let response = controller.archive(request.id).await?;
    Ok(Json(response))
}
