//! HTTP client for the disease prediction endpoint.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::health_url;
use crate::types::{AppError, AppResult, InferenceResult, ServiceStatus};

/// Upload one image and parse the prediction.
///
/// The body is a multipart form with a single `file` field. Only HTTP 200
/// with a well-formed JSON body counts as success.
pub async fn classify_image(file: &File, endpoint: &str) -> AppResult<InferenceResult> {
    let form_data = FormData::new().map_err(|e| AppError::FormData(format!("{:?}", e)))?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| AppError::FormData(format!("{:?}", e)))?;

    let started = js_sys::Date::now();
    log::info!("📤 Uploading {} ({} bytes) to {}", file.name(), file.size(), endpoint);

    let response = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| AppError::FormData(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if response.status() != 200 {
        let detail = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Status(response.status(), detail));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))?;
    let result = InferenceResult::from_json(&body)?;

    log::info!(
        "✅ Prediction in {:.0} ms: {} ({}%)",
        js_sys::Date::now() - started,
        result.label,
        result.confidence_percent()
    );
    Ok(result)
}

/// Probe the model server's `/ping` route next to `endpoint`.
pub async fn check_health(endpoint: &str) -> ServiceStatus {
    let url = health_url(endpoint);

    match Request::get(&url).send().await {
        Ok(response) if response.ok() => ServiceStatus::Online,
        Ok(response) => {
            log::warn!("Health probe {} answered {}", url, response.status());
            ServiceStatus::Offline
        }
        Err(e) => {
            log::warn!("Health probe {} failed: {}", url, e);
            ServiceStatus::Offline
        }
    }
}
