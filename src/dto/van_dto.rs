//! DTOs del recurso Van

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear una van
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateVanRequest {
    #[validate(length(min = 3, max = 20))]
    pub plate_no: String,

    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
}

/// Request para actualizar una van existente
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateVanRequest {
    #[validate(length(min = 3, max = 20))]
    pub plate_no: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    pub status: Option<String>,
}
