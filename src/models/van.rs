//! Modelo de Van

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Van - mapea a la tabla vans
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Van {
    pub id: Uuid,
    pub plate_no: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
