//! Servicio para el servidor GPS Traccar
//!
//! Wrapper delgado sobre la API HTTP de Traccar. Solo lectura: dispositivos
//! y posiciones. La integración es opcional; sin configuración los endpoints
//! responden 503.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::{AppError, AppResult};

/// Dispositivo registrado en Traccar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraccarDevice {
    pub id: i64,
    pub name: String,
    pub unique_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
}

/// Posición reportada por un dispositivo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraccarPosition {
    pub id: i64,
    pub device_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub course: Option<f64>,
    #[serde(default)]
    pub fix_time: Option<String>,
}

/// Cliente de la API de Traccar
pub struct TraccarService {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl TraccarService {
    /// Construye el cliente desde la configuración del entorno.
    /// Falla con 503 si la integración no está configurada.
    pub fn from_config(client: Client, config: &EnvironmentConfig) -> AppResult<Self> {
        match (&config.traccar_url, &config.traccar_username, &config.traccar_password) {
            (Some(url), Some(username), Some(password)) => Ok(Self {
                client,
                base_url: url.trim_end_matches('/').to_string(),
                username: username.clone(),
                password: password.clone(),
            }),
            _ => Err(AppError::ServiceUnavailable(
                "La integración con el servidor GPS no está configurada".to_string(),
            )),
        }
    }

    /// Obtiene los dispositivos registrados
    pub async fn get_devices(&self) -> AppResult<Vec<TraccarDevice>> {
        let url = format!("{}/api/devices", self.base_url);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error contacting Traccar: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Traccar devices request failed with status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<TraccarDevice>>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid Traccar response: {}", e)))
    }

    /// Obtiene las posiciones de un dispositivo
    pub async fn get_positions(&self, device_id: i64) -> AppResult<Vec<TraccarPosition>> {
        let url = format!("{}/api/positions", self.base_url);
        log::debug!("GET {} (deviceId={})", url, device_id);

        let response = self
            .client
            .get(&url)
            .query(&[("deviceId", device_id)])
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error contacting Traccar: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Traccar positions request failed with status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<TraccarPosition>>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid Traccar response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_full_configuration() {
        let mut config = EnvironmentConfig::default();
        config.traccar_url = Some("http://traccar.local:8082/".to_string());
        config.traccar_username = None;
        config.traccar_password = None;

        assert!(TraccarService::from_config(Client::new(), &config).is_err());

        config.traccar_username = Some("ops".to_string());
        config.traccar_password = Some("secret".to_string());
        let service = TraccarService::from_config(Client::new(), &config).unwrap();
        // la barra final se normaliza
        assert_eq!(service.base_url, "http://traccar.local:8082");
    }

    #[test]
    fn test_device_deserializes_from_traccar_payload() {
        let raw = r#"{"id": 7, "name": "DT-02", "uniqueId": "86420001", "status": "online", "lastUpdate": "2025-06-01T10:00:00Z"}"#;
        let device: TraccarDevice = serde_json::from_str(raw).unwrap();
        assert_eq!(device.unique_id, "86420001");
        assert_eq!(device.status.as_deref(), Some("online"));
    }
}
