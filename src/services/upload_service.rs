use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::utils::api_url;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    pub url: String,
}

/// Upload a file as multipart form data (POST /upload/).
/// El navegador pone el Content-Type con el boundary, no lo fijamos a mano.
pub async fn upload_file(token: &str, file: &File) -> Result<UploadResponse, String> {
    let url = format!("{}/upload/", api_url());

    let form_data = FormData::new().map_err(|_| "Error creando FormData".to_string())?;
    form_data
        .append_with_blob("file", file)
        .map_err(|_| "Error adjuntando el archivo".to_string())?;

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .body(form_data)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        let error_text = response.text().await.unwrap_or_else(|_| "Error desconocido".to_string());
        return Err(format!("Error del servidor ({}): {}", response.status(), error_text));
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
