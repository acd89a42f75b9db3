//! Controlador de Assignment

use crate::dto::assignment_dto::{
    AssignmentMessageResponse, CreateAssignmentRequest, DeleteAssignmentRequest,
    UpdateAssignmentRequest,
};
use crate::models::Assignment;
use crate::repositories::AssignmentRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct AssignmentController {
    repository: AssignmentRepository,
}

impl AssignmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AssignmentRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateAssignmentRequest) -> Result<Assignment, AppError> {
        self.repository
            .create(request.van_id, request.operator_id)
            .await
    }

    pub async fn list(&self) -> Result<Vec<Assignment>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        request: UpdateAssignmentRequest,
    ) -> Result<AssignmentMessageResponse, AppError> {
        // Verificar existencia antes del chequeo de colisión, para que un id
        // desconocido responda 404 y no un conflicto engañoso
        self.repository
            .find_by_id(request.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        let assignment = self
            .repository
            .update(request.id, request.van_id, request.operator_id)
            .await?;

        Ok(AssignmentMessageResponse {
            message: "Assignment updated successfully".to_string(),
            assignment,
        })
    }

    pub async fn delete(
        &self,
        request: DeleteAssignmentRequest,
    ) -> Result<AssignmentMessageResponse, AppError> {
        let assignment = self.repository.delete(request.id).await?;

        Ok(AssignmentMessageResponse {
            message: "Assignment deleted successfully".to_string(),
            assignment,
        })
    }
}
