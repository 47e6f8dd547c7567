use crate::config::CONFIG;

/// URL base del API REST
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000/api/v1 (por defecto)
/// - Producción: https://api.marketplace.nexuslabs.one/api/v1 (via .env)
pub fn api_url() -> &'static str {
    CONFIG.api_url()
}

/// Clave de localStorage para el bearer token (string crudo)
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "marketplace_accessToken";

/// Clave de localStorage para el perfil del usuario (JSON)
pub const STORAGE_KEY_USER_DATA: &str = "marketplace_userData";

/// Clave de localStorage para el cache del catálogo
pub const STORAGE_KEY_CATALOG_CACHE: &str = "marketplace_catalogCache";
