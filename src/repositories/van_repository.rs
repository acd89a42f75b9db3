//! Repositorio de Van

use crate::models::Van;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VanRepository {
    pool: PgPool,
}

impl VanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        plate_no: String,
        make: Option<String>,
        model: Option<String>,
    ) -> Result<Van, AppError> {
        let van = sqlx::query_as::<_, Van>(
            r#"
            INSERT INTO vans (id, plate_no, make, model, status, created_at)
            VALUES ($1, $2, $3, $4, 'active', NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plate_no)
        .bind(make)
        .bind(model)
        .fetch_one(&self.pool)
        .await
        .map_err(map_plate_error)?;

        Ok(van)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Van>, AppError> {
        let van = sqlx::query_as::<_, Van>("SELECT * FROM vans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(van)
    }

    pub async fn list(&self) -> Result<Vec<Van>, AppError> {
        let vans = sqlx::query_as::<_, Van>("SELECT * FROM vans ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(vans)
    }

    pub async fn plate_no_exists(&self, plate_no: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vans WHERE plate_no = $1)")
                .bind(plate_no)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        plate_no: Option<String>,
        make: Option<String>,
        model: Option<String>,
        status: Option<String>,
    ) -> Result<Van, AppError> {
        // Obtener la van actual para completar los campos no enviados
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Van not found".to_string()))?;

        let van = sqlx::query_as::<_, Van>(
            r#"
            UPDATE vans
            SET plate_no = $2, make = $3, model = $4, status = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(plate_no.unwrap_or(current.plate_no))
        .bind(make.or(current.make))
        .bind(model.or(current.model))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(map_plate_error)?;

        Ok(van)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Van not found".to_string()));
        }

        Ok(())
    }
}

/// Una van con asignación activa no puede eliminarse: la clave foránea de
/// assignments.van_id la retiene
fn map_delete_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_foreign_key_violation() {
            return AppError::Conflict("Van is currently assigned".to_string());
        }
    }
    AppError::Database(e)
}

fn map_plate_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict("Plate number already registered".to_string());
        }
    }
    AppError::Database(e)
}
