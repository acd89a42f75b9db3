//! Modelo de Operator
//!
//! Registro de operadores de la flota. El borrado es lógico: la bandera
//! `archived` marca al operador como archivado sin eliminar la fila.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Operator - mapea a la tabla operators
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Operator {
    pub id: Uuid,
    pub firstname: String,
    pub middlename: String,
    pub lastname: String,
    pub license_no: String,
    pub contact: String,
    pub region: String,
    pub city: String,
    pub brgy: String,
    pub street: String,
    #[serde(rename = "type")]
    pub operator_type: String,
    pub dl_codes: String,
    pub conditions: String,
    pub expiration_date: NaiveDate,
    pub emergency_name: String,
    pub emergency_address: String,
    pub emergency_contact: String,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Operator {
    /// Nombre completo para listados
    pub fn full_name(&self) -> String {
        if self.middlename.is_empty() {
            format!("{} {}", self.firstname, self.lastname)
        } else {
            format!("{} {} {}", self.firstname, self.middlename, self.lastname)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator(first: &str, middle: &str, last: &str) -> Operator {
        Operator {
            id: Uuid::new_v4(),
            firstname: first.to_string(),
            middlename: middle.to_string(),
            lastname: last.to_string(),
            license_no: "A01-23-456789".to_string(),
            contact: "09170000000".to_string(),
            region: "NCR".to_string(),
            city: "Quezon City".to_string(),
            brgy: "Commonwealth".to_string(),
            street: "Main St".to_string(),
            operator_type: "Driver".to_string(),
            dl_codes: "B".to_string(),
            conditions: "None".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            emergency_name: "".to_string(),
            emergency_address: "".to_string(),
            emergency_contact: "".to_string(),
            archived: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(operator("Juan", "Reyes", "Cruz").full_name(), "Juan Reyes Cruz");
        assert_eq!(operator("Juan", "", "Cruz").full_name(), "Juan Cruz");
    }

    #[test]
    fn operator_type_serializes_as_type() {
        let op = operator("Juan", "", "Cruz");
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["type"], "Driver");
        assert!(value.get("operator_type").is_none());
    }
}
