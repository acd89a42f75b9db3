//! Repositorio de Assignment
//!
//! El chequeo de colisión y la escritura se ejecutan dentro de la misma
//! transacción, con `FOR UPDATE` sobre las filas en conflicto. Cuando el
//! pre-chequeo no encuentra filas no hay nada que bloquear, así que la
//! garantía final son las restricciones UNIQUE de la tabla: una violación
//! de unicidad en la escritura se convierte en el mismo conflicto.

use crate::models::Assignment;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

const CONFLICT_MESSAGE: &str = "Van or operator is already assigned";

pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Assignment>, AppError> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assignments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(assignment)
    }

    pub async fn create(&self, van_id: Uuid, operator_id: Uuid) -> Result<Assignment, AppError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE van_id = $1 OR operator_id = $2 FOR UPDATE",
        )
        .bind(van_id)
        .bind(operator_id)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_some() {
            return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (id, van_id, operator_id, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(van_id)
        .bind(operator_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        tx.commit().await?;

        Ok(assignment)
    }

    pub async fn update(
        &self,
        id: Uuid,
        van_id: Uuid,
        operator_id: Uuid,
    ) -> Result<Assignment, AppError> {
        let mut tx = self.pool.begin().await?;

        // Misma regla de colisión que en create, auto-excluyendo el registro
        // que se está actualizando
        let existing = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT * FROM assignments
            WHERE (van_id = $1 OR operator_id = $2) AND id <> $3
            FOR UPDATE
            "#,
        )
        .bind(van_id)
        .bind(operator_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_some() {
            return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET van_id = $2, operator_id = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(van_id)
        .bind(operator_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        tx.commit().await?;

        Ok(assignment)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Assignment, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            "DELETE FROM assignments WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        Ok(assignment)
    }
}

/// Clasificar errores de escritura: una violación de unicidad es el mismo
/// conflicto que detecta el pre-chequeo; una violación de clave foránea
/// significa que la van o el operador referenciados no existen.
fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict(CONFLICT_MESSAGE.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return AppError::BadRequest(
                "Referenced van or operator does not exist".to_string(),
            );
        }
    }
    AppError::Database(e)
}
