use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::Order;
use crate::utils::api_url;

/// Convert the current cart into an order (POST /store/orders/checkout)
pub async fn checkout(token: &str) -> Result<Order, String> {
    let url = format!("{}/store/orders/checkout", api_url());

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the user's order history, newest first
pub async fn fetch_orders(token: &str, page: u32) -> Result<Vec<Order>, String> {
    let limit = CONFIG.catalog_config.page_size;
    let url = format!("{}/store/orders?page={}&limit={}", api_url(), page, limit);

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
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a single order with its items
pub async fn fetch_order(token: &str, order_id: &str) -> Result<Order, String> {
    let url = format!("{}/store/orders/{}", api_url(), order_id);

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
        .json::<Order>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Orders containing products of the authenticated seller
pub async fn fetch_merchant_orders(token: &str) -> Result<Vec<Order>, String> {
    let url = format!("{}/store/merchant/orders", api_url());

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
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update the fulfilment status of one order line (sellers only)
pub async fn update_order_item_status(
    token: &str,
    order_id: &str,
    product_id: &str,
    status: &str,
) -> Result<Order, String> {
    let url = format!(
        "{}/store/merchant/orders/{}/items/{}/status",
        api_url(),
        order_id,
        product_id
    );

    let response = Request::put(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(&serde_json::json!({ "status": status }))
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
