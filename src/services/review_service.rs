use gloo_net::http::Request;

use crate::models::{Review, ReviewInput};
use crate::utils::api_url;

/// Fetch the reviews of a product (público, sin token)
pub async fn fetch_reviews(product_id: &str) -> Result<Vec<Review>, String> {
    let url = format!("{}/reviews/{}", api_url(), product_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Review>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Publish a review (POST /reviews/)
pub async fn create_review(token: &str, review: &ReviewInput) -> Result<Review, String> {
    let url = format!("{}/reviews/", api_url());

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(review)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<Review>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
