//! Configuration for the frontend application.

/// Proxy base URL, fixed at compile time.
/// - For local development: the proxy on port 4000
/// - For deployments: set `PROXY_CONSOLE_API_BASE` when building
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("PROXY_CONSOLE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:4000",
};

/// Local storage key of the admin bearer token.
pub const TOKEN_STORAGE_KEY: &str = "proxy_console_token";

/// Quiet period before a key search hits the server.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// How long a success toast stays up. Error toasts stay until closed.
pub const NOTICE_DISMISS_MS: u32 = 3000;

/// Join `path` onto the API base without doubling slashes.
#[cfg(not(feature = "mock"))]
pub fn api_url(path: &str) -> String {
    let base = API_BASE.trim_end_matches('/');
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", base, path)
}
