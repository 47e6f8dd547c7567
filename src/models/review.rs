use serde::{Deserialize, Serialize};

/// Reseña de un producto (respuesta de GET /reviews/{product_id})
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

/// Cuerpo de POST /reviews/
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ReviewInput {
    pub product_id: String,
    pub rating: i64,
    pub comment: String,
}
