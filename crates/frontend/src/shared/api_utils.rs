//! Collaborator service address
//!
//! The SQL assistant service listens on port 5000 of the host that served the
//! page. A build can pin another origin with the `SQL_ASSISTANT_API_BASE`
//! environment variable, read at compile time.

/// Port of the assistant service when no explicit base is configured
pub const DEFAULT_API_PORT: u16 = 5000;

const FALLBACK_BASE: &str = "http://localhost:5000";

/// Get the base URL for API requests
///
/// # Returns
/// - `SQL_ASSISTANT_API_BASE` if it was set at build time, without trailing `/`
/// - otherwise `"{protocol}//{hostname}:5000"` from `window.location`
/// - `"http://localhost:5000"` if window is not available
pub fn api_base() -> String {
    if let Some(configured) = configured_base() {
        return configured;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return FALLBACK_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

fn configured_base() -> Option<String> {
    normalize_base(option_env!("SQL_ASSISTANT_API_BASE")?)
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/query");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
