use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Línea de un pedido
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
    pub price_at_purchase: f64,
    pub product_name: String,
    #[serde(default)]
    pub seller_id: Option<String>,
    #[serde(default = "default_item_status")]
    pub status: String,
}

fn default_item_status() -> String {
    "pending".to_string()
}

/// Pedido (respuesta de GET /store/orders)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub total_amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: String,
    // El backend manda datetimes naive (sin zona horaria)
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Order {
    /// Fecha corta para el listado de pedidos
    pub fn created_at_label(&self) -> String {
        self.created_at.format("%d/%m/%Y %H:%M").to_string()
    }
}
