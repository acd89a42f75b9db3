//! Controlador de Van

use crate::dto::van_dto::{CreateVanRequest, UpdateVanRequest};
use crate::dto::ApiResponse;
use crate::models::Van;
use crate::repositories::VanRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VanController {
    repository: VanRepository,
}

impl VanController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VanRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVanRequest) -> Result<ApiResponse<Van>, AppError> {
        request.validate()?;

        if request.plate_no.trim().is_empty() {
            return Err(AppError::BadRequest("Plate number is required".to_string()));
        }

        if self.repository.plate_no_exists(&request.plate_no).await? {
            return Err(AppError::Conflict(
                "Plate number already registered".to_string(),
            ));
        }

        let van = self
            .repository
            .create(request.plate_no, request.make, request.model)
            .await?;

        Ok(ApiResponse::success_with_message(
            van,
            "Van created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Van, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Van not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Van>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVanRequest,
    ) -> Result<ApiResponse<Van>, AppError> {
        request.validate()?;

        let van = self
            .repository
            .update(id, request.plate_no, request.make, request.model, request.status)
            .await?;

        Ok(ApiResponse::success_with_message(
            van,
            "Van updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
