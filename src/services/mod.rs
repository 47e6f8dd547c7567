pub mod auth_service;
pub mod cart_service;
pub mod order_service;
pub mod product_service;
pub mod review_service;
pub mod upload_service;

pub use auth_service::*;
pub use cart_service::*;
pub use order_service::*;
pub use product_service::*;
pub use review_service::*;
pub use upload_service::*;

/// Detecta errores de autorización en los mensajes de error del API.
/// Un 401 tras restaurar sesión significa token caducado: la vista debe
/// hacer logout.
pub fn is_unauthorized(err: &str) -> bool {
    err.contains("401")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detecta_401() {
        assert!(is_unauthorized("Error del servidor (401): token expirado"));
        assert!(!is_unauthorized("Error del servidor (500): boom"));
    }
}
