use serde::{Deserialize, Serialize};

/// Rol del usuario - conjunto cerrado, cualquier otro valor es inválido
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Consumer,
    Seller,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Consumer => "consumer",
            UserRole::Seller => "seller",
            UserRole::Admin => "admin",
        }
    }

    /// Vendedores y admins acceden al dashboard
    pub fn can_manage_store(&self) -> bool {
        matches!(self, UserRole::Seller | UserRole::Admin)
    }
}

/// Perfil del usuario autenticado (respuesta de GET /auth/me)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
}

/// Campos editables del perfil (PUT /auth/me)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rol_desconocido_no_parsea() {
        // Un rol fuera del conjunto cerrado debe fallar la deserialización
        let json = r#"{"id":"u1","email":"a@b.com","full_name":"A B","role":"superuser"}"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }

    #[test]
    fn perfil_sin_campos_opcionales_parsea() {
        let json = r#"{"id":"u1","email":"a@b.com","full_name":"A B","role":"consumer"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, UserRole::Consumer);
        assert!(profile.phone_number.is_none());
    }

    #[test]
    fn perfil_sin_rol_no_parsea() {
        let json = r#"{"id":"u1","email":"a@b.com","full_name":"A B"}"#;
        assert!(serde_json::from_str::<UserProfile>(json).is_err());
    }

    #[test]
    fn acceso_al_dashboard_por_rol() {
        assert!(UserRole::Seller.can_manage_store());
        assert!(UserRole::Admin.can_manage_store());
        assert!(!UserRole::Consumer.can_manage_store());
    }
}
