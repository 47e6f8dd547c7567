use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub catalog_config: CatalogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:8000/api/v1".to_string(),
            api_url_production: "https://api.marketplace.nexuslabs.one/api/v1".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            catalog_config: CatalogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub page_size: u32,
    pub cache_ttl_hours: i64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            cache_ttl_hours: 1,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:8000/api/v1").to_string(),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .unwrap_or("https://api.marketplace.nexuslabs.one/api/v1").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            catalog_config: CatalogConfig {
                page_size: option_env!("CATALOG_PAGE_SIZE")
                    .unwrap_or("20").parse().unwrap_or(20),
                cache_ttl_hours: option_env!("CATALOG_CACHE_TTL_HOURS")
                    .unwrap_or("1").parse().unwrap_or(1),
            },
        }
    }

    /// Obtiene la URL del API según el entorno actual
    pub fn api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_segun_entorno() {
        let mut config = AppConfig::default();
        assert_eq!(config.api_url(), "http://localhost:8000/api/v1");

        config.environment = "production".to_string();
        assert_eq!(
            config.api_url(),
            "https://api.marketplace.nexuslabs.one/api/v1"
        );
    }
}
