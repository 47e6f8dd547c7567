use serde::{Deserialize, Serialize};

/// Línea del carrito
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.price.unwrap_or(0.0) * self.quantity as f64
    }
}

/// Carrito del usuario (respuesta de GET /store/cart)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Cart {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: f64,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Total calculado en cliente - el backend manda `total`, pero tras
    /// editar cantidades localmente este valor es el que se muestra
    pub fn computed_total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

/// Cuerpo de POST /store/cart/add
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, quantity: i64, price: f64) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            quantity,
            product_name: None,
            price: Some(price),
            image: None,
        }
    }

    #[test]
    fn total_calculado() {
        let cart = Cart {
            id: "c1".to_string(),
            user_id: "u1".to_string(),
            items: vec![item("p1", 2, 10.0), item("p2", 1, 5.5)],
            total: 0.0,
        };
        assert_eq!(cart.computed_total(), 25.5);
        assert_eq!(cart.item_count(), 3);
        assert!(!cart.is_empty());
    }

    #[test]
    fn item_sin_precio_suma_cero() {
        let mut it = item("p1", 4, 0.0);
        it.price = None;
        assert_eq!(it.subtotal(), 0.0);
    }
}
