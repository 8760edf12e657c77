//! Application configuration.
//!
//! Endpoint URLs are baked in at build time from the environment trunk
//! runs with (`FISHSCAN_API_URL`, `FISHSCAN_SPECIES_URL`), falling back to
//! the local development defaults.

/// Default inference endpoint (local FastAPI model server).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/predict";

/// Default companion species-prediction page.
pub const DEFAULT_SPECIES_PAGE_URL: &str = "http://localhost:5000/indexfish.html";

/// Application name, used for the document title.
pub const APP_NAME: &str = "Fish Disease Prediction";

/// Mime prefix accepted by the drop-zone.
pub const ACCEPTED_MIME_PREFIX: &str = "image/";

/// Maximum file size accepted by the drop-zone (in bytes).
///
/// 3 MB, the usual dropzone default.
pub const MAX_FILE_SIZE: f64 = 3_000_000.0;

/// Message shown for every failed prediction request.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload the file. Please try again.";

/// Inference endpoint URL.
pub fn api_url() -> &'static str {
    option_env!("FISHSCAN_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Companion species-prediction page URL.
pub fn species_page_url() -> &'static str {
    option_env!("FISHSCAN_SPECIES_URL").unwrap_or(DEFAULT_SPECIES_PAGE_URL)
}

/// Health probe URL derived from the inference endpoint.
///
/// The last path segment is replaced by `ping`, so
/// `http://host:8000/predict` becomes `http://host:8000/ping`.
pub fn health_url(endpoint: &str) -> String {
    let trimmed = endpoint.trim_end_matches('/');
    let scheme_end = trimmed.find("://").map(|i| i + 3).unwrap_or(0);

    match trimmed[scheme_end..].rfind('/') {
        Some(idx) => format!("{}/ping", &trimmed[..scheme_end + idx]),
        None => format!("{}/ping", trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_url_replaces_last_segment() {
        assert_eq!(health_url("http://localhost:8000/predict"), "http://localhost:8000/ping");
        assert_eq!(health_url("https://api.example.org/v1/predict/"), "https://api.example.org/v1/ping");
    }

    #[test]
    fn test_health_url_without_path() {
        assert_eq!(health_url("http://localhost:8000"), "http://localhost:8000/ping");
    }

    #[test]
    fn test_defaults_are_used_without_env() {
        if option_env!("FISHSCAN_API_URL").is_none() {
            assert_eq!(api_url(), DEFAULT_API_URL);
        }
        if option_env!("FISHSCAN_SPECIES_URL").is_none() {
            assert_eq!(species_page_url(), DEFAULT_SPECIES_PAGE_URL);
        }
    }
}
