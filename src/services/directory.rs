// ============================================================================
// DIRECTORY SERVICE CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend
// que guarda concesionarios y coches.
// ============================================================================

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Car, DealerRecord};
use crate::utils::constants::BACKEND_URL;

/// Errores del Directory Service. Los mensajes que ve el usuario son
/// textos fijos elegidos en los hooks; esto es solo para logs y decisiones.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    #[error("record not found")]
    NotFound,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Puerto del Directory Service. Los hooks y la lógica de sesión son
/// genéricos sobre este trait; en producción se usa `DirectoryClient`
/// y en tests un mock en memoria.
#[allow(async_fn_in_trait)]
pub trait DirectoryApi {
    async fn validate_dealer(&self, dealer_id: &str) -> Result<DealerRecord, DirectoryError>;
    async fn login_dealer(&self, id_number: &str) -> Result<DealerRecord, DirectoryError>;
    async fn get_dealer_cars(&self, dealer_id: &str) -> Result<Vec<Car>, DirectoryError>;
    async fn update_car_status(&self, car_id: &str, is_sold: bool) -> Result<(), DirectoryError>;
}

/// Cliente HTTP real (stateless)
#[derive(Clone)]
pub struct DirectoryClient {
    base_url: String,
}

#[derive(Serialize)]
struct UpdateStatusRequest {
    is_sold: bool,
}

impl DirectoryClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, DirectoryError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        match response.status() {
            404 => Err(DirectoryError::NotFound),
            s if !response.ok() => Err(DirectoryError::Status(s)),
            _ => response
                .json::<T>()
                .await
                .map_err(|e| DirectoryError::Parse(e.to_string())),
        }
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryApi for DirectoryClient {
    /// Valida que el id persistido siga correspondiendo a un concesionario
    async fn validate_dealer(&self, dealer_id: &str) -> Result<DealerRecord, DirectoryError> {
        let url = format!("{}/v1/dealers/{}", self.base_url, dealer_id);
        log::info!("🔍 Validando concesionario: {}", dealer_id);
        self.get_json(&url).await
    }

    /// Login por clave secundaria (número de identificación, recortado)
    async fn login_dealer(&self, id_number: &str) -> Result<DealerRecord, DirectoryError> {
        let url = format!(
            "{}/v1/dealers/by-id-number/{}",
            self.base_url,
            js_sys::encode_uri_component(id_number.trim())
        );
        log::info!("🔐 Login de concesionario por id_number");
        self.get_json(&url).await
    }

    /// Lista completa de coches del concesionario
    async fn get_dealer_cars(&self, dealer_id: &str) -> Result<Vec<Car>, DirectoryError> {
        let url = format!("{}/v1/dealers/{}/cars", self.base_url, dealer_id);
        log::info!("🚗 Obteniendo inventario del concesionario {}", dealer_id);
        self.get_json(&url).await
    }

    /// Marca un coche como vendido/disponible
    async fn update_car_status(&self, car_id: &str, is_sold: bool) -> Result<(), DirectoryError> {
        let url = format!("{}/v1/cars/{}/status", self.base_url, car_id);
        log::info!("✏️ Actualizando coche {} -> is_sold={}", car_id, is_sold);

        let response = Request::patch(&url)
            .json(&UpdateStatusRequest { is_sold })
            .map_err(|e| DirectoryError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        match response.status() {
            404 => Err(DirectoryError::NotFound),
            s if !response.ok() => Err(DirectoryError::Status(s)),
            _ => Ok(()),
        }
    }
}
