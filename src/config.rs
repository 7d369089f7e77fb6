use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub geocoding_base_url: String,
    pub geocoding_access_token: String,
    pub chat_room_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.ecomovex.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            geocoding_base_url: "https://api.mapbox.com/search/searchbox/v1".to_string(),
            geocoding_access_token: String::new(),
            chat_room_id: "ecomovex-support".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.ecomovex.app").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            geocoding_base_url: option_env!("GEOCODING_BASE_URL")
                .unwrap_or("https://api.mapbox.com/search/searchbox/v1").to_string(),
            geocoding_access_token: option_env!("GEOCODING_ACCESS_TOKEN")
                .unwrap_or("").to_string(),
            chat_room_id: option_env!("CHAT_ROOM_ID")
                .unwrap_or("ecomovex-support").to_string(),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Token del API de geocoding
    pub fn geocoding_token(&self) -> &str {
        &self.geocoding_access_token
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
