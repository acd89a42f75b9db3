//! Modelo de Assignment
//!
//! Una asignación vincula exactamente una van con exactamente un operador.
//! Invariante: en todo momento, `van_id` aparece en a lo sumo una asignación
//! y `operator_id` aparece en a lo sumo una asignación. Son dos restricciones
//! de unicidad independientes, no una clave compuesta: cualquiera de las dos
//! colisiones por sí sola rechaza la escritura.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Assignment - mapea a la tabla assignments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Assignment {
    pub id: Uuid,
    pub van_id: Uuid,
    pub operator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    /// Una asignación existente colisiona con el par (van_id, operator_id)
    /// si comparte cualquiera de los dos campos
    pub fn collides_with(&self, van_id: Uuid, operator_id: Uuid) -> bool {
        self.van_id == van_id || self.operator_id == operator_id
    }
}

/// Buscar una asignación en conflicto con el par dado, excluyendo opcionalmente
/// una asignación por id (auto-exclusión en updates).
///
/// Modelo de referencia del predicado que el repositorio ejecuta en SQL
/// (`WHERE (van_id = $1 OR operator_id = $2) AND id <> $3`): en producción la
/// condición corre en la base de datos; los tests unitarios validan la
/// semántica contra esta versión en memoria.
pub fn find_collision(
    assignments: &[Assignment],
    van_id: Uuid,
    operator_id: Uuid,
    exclude: Option<Uuid>,
) -> Option<&Assignment> {
    assignments
        .iter()
        .find(|a| Some(a.id) != exclude && a.collides_with(van_id, operator_id))
}
