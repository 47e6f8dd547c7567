use serde::{Deserialize, Serialize};

/// Respuesta de POST /auth/login/access-token
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Cuerpo de POST /auth/signup
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}
