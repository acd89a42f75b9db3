//! Rutas del recurso Assignment
//!
//! Recurso de colección: update y delete reciben el id en el body.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::assignment_controller::AssignmentController;
use crate::dto::assignment_dto::{
    AssignmentMessageResponse, CreateAssignmentRequest, DeleteAssignmentRequest,
    UpdateAssignmentRequest,
};
use crate::models::Assignment;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment))
        .route("/", get(list_assignments))
        .route("/", put(update_assignment))
        .route("/", delete(delete_assignment))
}

async fn create_assignment(
    State(state): State<AppState>,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<Assignment>), AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let assignment = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let assignments = controller.list().await?;
    Ok(Json(assignments))
}

async fn update_assignment(
    State(state): State<AppState>,
    Json(request): Json<UpdateAssignmentRequest>,
) -> Result<Json<AssignmentMessageResponse>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.update(request).await?;
    Ok(Json(response))
}

async fn delete_assignment(
    State(state): State<AppState>,
    Json(request): Json<DeleteAssignmentRequest>,
) -> Result<Json<AssignmentMessageResponse>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.delete(request).await?;
    Ok(Json(response))
}
