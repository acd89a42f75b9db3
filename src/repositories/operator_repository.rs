//! Repositorio de Operator
//!
//! El archivado es un borrado lógico: la fila queda con archived = TRUE
//! y deja de aparecer en los listados.

use crate::dto::operator_dto::RegisterOperatorRequest;
use crate::models::Operator;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct OperatorRepository {
    pool: PgPool,
}

impl OperatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_active(&self) -> Result<Vec<Operator>, AppError> {
        let operators = sqlx::query_as::<_, Operator>(
            "SELECT * FROM operators WHERE archived = FALSE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(operators)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Operator>, AppError> {
        let operator = sqlx::query_as::<_, Operator>("SELECT * FROM operators WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(operator)
    }

    pub async fn license_no_exists(
        &self,
        license_no: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM operators
                WHERE license_no = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(license_no)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn create(&self, request: RegisterOperatorRequest) -> Result<Operator, AppError> {
        let operator = sqlx::query_as::<_, Operator>(
            r#"
            INSERT INTO operators (
                id, firstname, middlename, lastname, license_no, contact,
                region, city, brgy, street, operator_type, dl_codes, conditions,
                expiration_date, emergency_name, emergency_address,
                emergency_contact, archived, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.firstname)
        .bind(request.middlename)
        .bind(request.lastname)
        .bind(request.license_no)
        .bind(request.contact)
        .bind(request.region)
        .bind(request.city)
        .bind(request.brgy)
        .bind(request.street)
        .bind(request.operator_type)
        .bind(request.dl_codes)
        .bind(request.conditions)
        .bind(request.expiration_date)
        .bind(request.emergency_name)
        .bind(request.emergency_address)
        .bind(request.emergency_contact)
        .bind(request.archived)
        .fetch_one(&self.pool)
        .await
        .map_err(map_license_error)?;

        Ok(operator)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: RegisterOperatorRequest,
    ) -> Result<Operator, AppError> {
        let operator = sqlx::query_as::<_, Operator>(
            r#"
            UPDATE operators
            SET firstname = $2, middlename = $3, lastname = $4, license_no = $5,
                contact = $6, region = $7, city = $8, brgy = $9, street = $10,
                operator_type = $11, dl_codes = $12, conditions = $13,
                expiration_date = $14, emergency_name = $15,
                emergency_address = $16, emergency_contact = $17
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.firstname)
        .bind(request.middlename)
        .bind(request.lastname)
        .bind(request.license_no)
        .bind(request.contact)
        .bind(request.region)
        .bind(request.city)
        .bind(request.brgy)
        .bind(request.street)
        .bind(request.operator_type)
        .bind(request.dl_codes)
        .bind(request.conditions)
        .bind(request.expiration_date)
        .bind(request.emergency_name)
        .bind(request.emergency_address)
        .bind(request.emergency_contact)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_license_error)?
        .ok_or_else(|| AppError::NotFound("Operator not found".to_string()))?;

        Ok(operator)
    }

    /// Borrado lógico: marca archived = TRUE y conserva la fila
    pub async fn archive(&self, id: Uuid) -> Result<Operator, AppError> {
        let operator = sqlx::query_as::<_, Operator>(
            "UPDATE operators SET archived = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Operator not found".to_string()))?;

        Ok(operator)
    }
}

fn map_license_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::Conflict("License number already registered".to_string());
        }
    }
    AppError::Database(e)
}
