use gloo_net::http::Request;

use crate::models::{ProfileUpdate, SignupRequest, TokenResponse, UserProfile, UserRole};
use crate::utils::api_url;

/// Perform login with email and password (OAuth2 password flow, form-urlencoded)
pub async fn perform_login(email: &str, password: &str) -> Result<TokenResponse, String> {
    let url = format!("{}/auth/login/access-token", api_url());
    let body = format!(
        "username={}&password={}",
        js_sys::encode_uri_component(email),
        js_sys::encode_uri_component(password)
    );

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the authenticated user's profile (GET /auth/me)
pub async fn fetch_me(token: &str) -> Result<UserProfile, String> {
    let url = format!("{}/auth/me", api_url());

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
        .json::<UserProfile>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Register a new account (POST /auth/signup?role=...)
pub async fn signup(request: SignupRequest, role: UserRole) -> Result<UserProfile, String> {
    let url = format!("{}/auth/signup?role={}", api_url(), role.as_str());

    let response = Request::post(&url)
        .json(&request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<UserProfile>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update the authenticated user's profile (PUT /auth/me)
pub async fn update_profile(token: &str, updates: &ProfileUpdate) -> Result<UserProfile, String> {
    let url = format!("{}/auth/me", api_url());

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

    response
        .json::<UserProfile>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete the authenticated user's account (DELETE /auth/me, responde 204)
pub async fn delete_account(token: &str) -> Result<(), String> {
    let url = format!("{}/auth/me", api_url());

    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    Ok(())
}
