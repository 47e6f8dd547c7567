use serde::{Deserialize, Serialize};

/// Producto del catálogo
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub seller_id: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub videos: Option<Vec<String>>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Primera imagen del producto, si existe
    pub fn cover_image(&self) -> Option<&str> {
        self.images.as_ref()?.first().map(String::as_str)
    }
}

/// Cuerpo para crear/actualizar un producto (POST/PUT /products)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imagen_de_portada() {
        let mut p = Product {
            id: "p1".to_string(),
            name: "Teclado".to_string(),
            description: String::new(),
            price: 49.9,
            stock: 0,
            category: "electronics".to_string(),
            seller_id: "s1".to_string(),
            images: None,
            videos: None,
        };
        assert!(p.cover_image().is_none());
        assert!(!p.in_stock());

        p.images = Some(vec!["/uploads/a.jpg".to_string(), "/uploads/b.jpg".to_string()]);
        p.stock = 3;
        assert_eq!(p.cover_image(), Some("/uploads/a.jpg"));
        assert!(p.in_stock());
    }
}
