/// Backend used when `BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub fn get_backend_url() -> String {
    resolve_backend_url(option_env!("BACKEND_URL"))
}

/// Blank or missing values fall back to the local default. Trailing slashes are
/// dropped so paths can be appended as `{base}/api/...`.
pub fn resolve_backend_url(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}
