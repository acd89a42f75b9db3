//! Controlador de Operator

use crate::dto::operator_dto::{RegisterOperatorRequest, UpdateOperatorRequest};
use crate::dto::ApiResponse;
use crate::models::Operator;
use crate::repositories::OperatorRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct OperatorController {
    repository: OperatorRepository,
}

impl OperatorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OperatorRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterOperatorRequest,
    ) -> Result<ApiResponse<Operator>, AppError> {
        request.validate()?;

        // Pre-chequeo amigable; la restricción UNIQUE de license_no respalda
        // el caso de carrera
        if self.repository.license_no_exists(&request.license_no, None).await? {
            return Err(AppError::Conflict(
                "License number already registered".to_string(),
            ));
        }

        let operator = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            operator,
            "Operator registered successfully".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<Operator>, AppError> {
        self.repository.list_active().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateOperatorRequest,
    ) -> Result<ApiResponse<Operator>, AppError> {
        request.validate()?;

        if self.repository.license_no_exists(&request.license_no, Some(id)).await? {
            return Err(AppError::Conflict(
                "License number already registered".to_string(),
            ));
        }

        let operator = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            operator,
            "Operator updated successfully".to_string(),
        ))
    }

    pub async fn archive(&self, id: Uuid) -> Result<ApiResponse<Operator>, AppError> {
        let operator = self.repository.archive(id).await?;

        Ok(ApiResponse::success_with_message(
            operator,
            "Operator archived successfully".to_string(),
        ))
    }
}
