//! Cliente HTTP del endpoint de operadores
//!
//! El cliente mantiene sus propios tipos serde; solo el 409 por licencia
//! duplicada se distingue del resto de los fallos.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errores del cliente del registro
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("License number already registered")]
    DuplicateLicense,

    #[error("Request failed with status {0}")]
    Api(u16),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Operador tal como lo entrega el endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub id: Uuid,
    pub firstname: String,
    #[serde(default)]
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
    pub expiration_date: String,
    pub emergency_name: String,
    pub emergency_address: String,
    pub emergency_contact: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Formulario de registro, todos los campos como texto igual que en la UI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorDraft {
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
    pub expiration_date: String,
    pub emergency_name: String,
    pub emergency_address: String,
    pub emergency_contact: String,
    pub archived: bool,
}

/// Contrato del endpoint de operadores, visto desde el cliente
#[async_trait]
pub trait OperatorApi {
    async fn list(&self) -> Result<Vec<Operator>, RegistryError>;
    async fn register(&self, draft: &OperatorDraft) -> Result<(), RegistryError>;
    async fn update(&self, operator: &Operator) -> Result<(), RegistryError>;
    async fn archive(&self, id: Uuid) -> Result<(), RegistryError>;
}

/// Cliente HTTP real contra el backend
pub struct OperatorRegistryClient {
    http: Client,
    base_url: String,
}

impl OperatorRegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn operators_url(&self) -> String {
        format!("{}/api/operators", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl OperatorApi for OperatorRegistryClient {
    async fn list(&self) -> Result<Vec<Operator>, RegistryError> {
        let response = self.http.get(self.operators_url()).send().await?;
        if !response.status().is_success() {
            return Err(RegistryError::Api(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn register(&self, draft: &OperatorDraft) -> Result<(), RegistryError> {
        let response = self
            .http
            .post(self.operators_url())
            .json(draft)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(RegistryError::DuplicateLicense),
            status => Err(RegistryError::Api(status.as_u16())),
        }
    }

    async fn update(&self, operator: &Operator) -> Result<(), RegistryError> {
        let url = format!("{}/{}", self.operators_url(), operator.id);
        let response = self.http.put(url).json(operator).send().await?;
        if !response.status().is_success() {
            return Err(RegistryError::Api(response.status().as_u16()));
        }
        Ok(())
    }

    async fn archive(&self, id: Uuid) -> Result<(), RegistryError> {
        let response = self
            .http
            .delete(self.operators_url())
            .json(&serde_json::json!({ "id": id }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RegistryError::Api(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_url_normalizes_trailing_slash() {
        let client = OperatorRegistryClient::new("http://localhost:3000/");
        assert_eq!(client.operators_url(), "http://localhost:3000/api/operators");
    }

    #[test]
    fn draft_serializes_type_field() {
        let draft = OperatorDraft {
            operator_type: "Driver".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["type"], "Driver");
    }
}
