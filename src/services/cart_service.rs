use gloo_net::http::Request;

use crate::models::{AddToCartRequest, Cart, Product};
use crate::utils::api_url;

/// Fetch the authenticated user's cart
pub async fn fetch_cart(token: &str) -> Result<Cart, String> {
    let url = format!("{}/store/cart", api_url());

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<Cart>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Add a product to the cart (POST /store/cart/add)
pub async fn add_to_cart(token: &str, product: &Product, quantity: i64) -> Result<Cart, String> {
    let url = format!("{}/store/cart/add", api_url());
    let request_body = AddToCartRequest {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        quantity,
        price: product.price,
    };

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<Cart>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Change the quantity of a cart line (PUT /store/cart/items/{product_id})
pub async fn update_cart_item(token: &str, product_id: &str, quantity: i64) -> Result<Cart, String> {
    let url = format!("{}/store/cart/items/{}", api_url(), product_id);

    let response = Request::put(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(&serde_json::json!({ "quantity": quantity }))
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<Cart>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Remove a cart line (DELETE /store/cart/items/{product_id})
pub async fn delete_cart_item(token: &str, product_id: &str) -> Result<Cart, String> {
    let url = format!("{}/store/cart/items/{}", api_url(), product_id);

    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<Cart>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
