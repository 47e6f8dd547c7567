use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{Product, ProductInput};
use crate::utils::{api_url, load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_CATALOG_CACHE};

#[derive(serde::Serialize, serde::Deserialize)]
struct CatalogCache {
    products: Vec<Product>,
    timestamp: String,
}

/// Load the product catalog from the backend (with cache).
/// Solo se cachea la primera página, que es la que se pinta en frío.
pub async fn fetch_products(page: u32) -> Result<Vec<Product>, String> {
    let limit = CONFIG.catalog_config.page_size;

    // Check cache first
    if page == 1 {
        if let Some(cache) = load_from_storage::<CatalogCache>(STORAGE_KEY_CATALOG_CACHE) {
            if let Ok(cache_time) = chrono::DateTime::parse_from_rfc3339(&cache.timestamp) {
                let now = chrono::Utc::now();
                let cache_age = now.signed_duration_since(cache_time.with_timezone(&chrono::Utc));

                if cache_age.num_hours() < CONFIG.catalog_config.cache_ttl_hours {
                    log::info!("📋 Usando catálogo del cache ({} min de antigüedad)", cache_age.num_minutes());
                    return Ok(cache.products);
                } else {
                    log::info!("📋 Cache del catálogo expirado, obteniendo datos frescos...");
                }
            }
        }
    }

    // Fetch from API
    let url = format!("{}/products/?page={}&limit={}", api_url(), page, limit);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let products = response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    // Save to cache
    if page == 1 {
        let cache = CatalogCache {
            products: products.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        let _ = save_to_storage(STORAGE_KEY_CATALOG_CACHE, &cache);
        log::info!("💾 {} productos guardados en cache", products.len());
    }

    Ok(products)
}

/// Fetch full details for a single product
pub async fn fetch_product_details(product_id: &str) -> Result<Product, String> {
    let url = format!("{}/products/details/{}", api_url(), product_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a product (sellers only)
pub async fn create_product(token: &str, product: &ProductInput) -> Result<Product, String> {
    let url = format!("{}/products/", api_url());

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(product)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    invalidate_catalog_cache();
    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update a product owned by the authenticated seller
pub async fn update_product(token: &str, product_id: &str, updates: &ProductInput) -> Result<Product, String> {
    let url = format!("{}/products/{}", api_url(), product_id);

    let response = Request::put(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(updates)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    invalidate_catalog_cache();
    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a product owned by the authenticated seller
pub async fn delete_product(token: &str, product_id: &str) -> Result<(), String> {
    let url = format!("{}/products/{}", api_url(), product_id);

    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    invalidate_catalog_cache();
    Ok(())
}

/// El catálogo cacheado deja de valer tras cualquier mutación de productos
fn invalidate_catalog_cache() {
    let _ = remove_from_storage(STORAGE_KEY_CATALOG_CACHE);
}
