//! DTOs del recurso Operator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para registrar un operador - campos del formulario de registro
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct RegisterOperatorRequest {
    #[validate(length(min = 1, max = 100))]
    pub firstname: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub middlename: String,

    #[validate(length(min = 1, max = 100))]
    pub lastname: String,

    #[validate(length(min = 1, max = 50))]
    pub license_no: String,

    #[validate(length(min = 1, max = 50))]
    pub contact: String,

    #[validate(length(min = 1, max = 100))]
    pub region: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 100))]
    pub brgy: String,

    #[validate(length(min = 1, max = 200))]
    pub street: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub operator_type: String,

    #[validate(length(min = 1, max = 50))]
    pub dl_codes: String,

    #[validate(length(min = 1, max = 200))]
    pub conditions: String,

    pub expiration_date: NaiveDate,

    #[validate(length(min = 1, max = 200))]
    pub emergency_name: String,

    #[validate(length(min = 1, max = 300))]
    pub emergency_address: String,

    #[validate(length(min = 1, max = 50))]
    pub emergency_contact: String,

    #[serde(default)]
    pub archived: bool,
}

/// Request para actualizar un operador - reemplazo completo de los campos
/// editables, mismo formulario que el registro
pub type UpdateOperatorRequest = RegisterOperatorRequest;

/// Request para archivar un operador (borrado lógico)
#[derive(Debug, Deserialize, Serialize)]
pub struct ArchiveOperatorRequest {
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_request() -> RegisterOperatorRequest {
        serde_json::from_value(serde_json::json!({
            "firstname": "Juan",
            "lastname": "Cruz",
            "license_no": "A01-23-456789",
            "contact": "09170000000",
            "region": "NCR",
            "city": "Quezon City",
            "brgy": "Commonwealth",
            "street": "Main St",
            "type": "Driver",
            "dl_codes": "B",
            "conditions": "None",
            "expiration_date": "2027-01-01",
            "emergency_name": "Maria Cruz",
            "emergency_address": "Main St",
            "emergency_contact": "09171111111"
        }))
        .unwrap()
    }

    #[test]
    fn middlename_and_archived_are_optional() {
        let request = valid_request();
        assert!(request.validate().is_ok());
        assert_eq!(request.middlename, "");
        assert!(!request.archived);
    }

    #[test]
    fn empty_firstname_fails_validation() {
        let mut request = valid_request();
        request.firstname = String::new();
        assert!(request.validate().is_err());
    }
}
