//! DTOs del recurso Assignment
//!
//! El contrato es de colección: update y delete llevan el id en el body,
//! no en la ruta.

use crate::models::Assignment;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request para crear una asignación
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateAssignmentRequest {
    pub van_id: Uuid,
    pub operator_id: Uuid,
}

/// Request para actualizar una asignación (reemplaza ambas claves foráneas)
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateAssignmentRequest {
    pub id: Uuid,
    pub van_id: Uuid,
    pub operator_id: Uuid,
}

/// Request para eliminar una asignación
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteAssignmentRequest {
    pub id: Uuid,
}

/// Response para update y delete: mensaje más la asignación afectada
#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentMessageResponse {
    pub message: String,
    pub assignment: Assignment,
}
