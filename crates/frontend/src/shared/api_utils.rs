//! API utilities for frontend-backend communication
//!
//! The chat page is served by the same origin as `/api/chat` and the output
//! files, so every request goes to the page's own origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "http://localhost:3000"
/// - Empty string if window is not available (requests then stay relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full URL from a root-relative path
///
/// Absolute `http(s)://` URLs are passed through unchanged.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/chat");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
