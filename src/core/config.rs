//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos options (site address, reload port) come from `[package.metadata.leptos]`
//! in Cargo.toml instead.

use crate::core::RouteTable;

/// Backend origin used when `BACKEND_URL` is not set
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// API prefixes forwarded when `PROXY_PREFIXES` is not set
pub const DEFAULT_PROXY_PREFIXES: [&str; 2] = ["/predict", "/chat"];

/// Path served by the app itself besides the route table (compiled assets)
const ASSETS_PREFIX: &str = "/pkg";

/// Characters that carry meaning in router paths
const ROUTE_SYNTAX: [char; 6] = ['{', '}', '*', ':', '?', '#'];

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BACKEND_URL is not a valid http(s) URL: {0}")]
    InvalidBackendUrl(String),

    #[error("Proxy prefix must be an absolute, non-root path without route syntax: {0:?}")]
    InvalidPrefix(String),

    #[error("Proxy prefixes {0:?} and {1:?} overlap")]
    OverlappingPrefix(String, String),

    #[error("Proxy prefix {0:?} collides with a path served by the app")]
    ReservedPrefix(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin the development proxy forwards API calls to, without trailing slash
    /// Example: http://localhost:5000
    pub backend_url: String,

    /// Path prefixes forwarded to the backend
    /// Example: /predict,/chat
    pub proxy_prefixes: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("BACKEND_URL").ok(),
            std::env::var("PROXY_PREFIXES").ok(),
        )
    }

    /// Build configuration from raw variable values
    pub fn from_vars(
        backend_url: Option<String>,
        proxy_prefixes: Option<String>,
    ) -> Result<Self, ConfigError> {
        let backend_url = match backend_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => parse_backend_url(&url)?,
            None => DEFAULT_BACKEND_URL.to_string(),
        };

        let proxy_prefixes = match proxy_prefixes.filter(|list| !list.trim().is_empty()) {
            Some(list) => parse_prefixes(&list)?,
            None => DEFAULT_PROXY_PREFIXES.iter().map(|p| p.to_string()).collect(),
        };

        Ok(Self {
            backend_url,
            proxy_prefixes,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            proxy_prefixes: DEFAULT_PROXY_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

fn parse_backend_url(raw: &str) -> Result<String, ConfigError> {
    let url = reqwest::Url::parse(raw.trim())
        .map_err(|_| ConfigError::InvalidBackendUrl(raw.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidBackendUrl(raw.to_string()));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Parse the comma separated prefix list
///
/// Every prefix becomes two router entries (`/p` and `/p/{*rest}`) next to the
/// page routes, so anything that would make those entries conflict is
/// rejected here.
fn parse_prefixes(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut prefixes: Vec<String> = Vec::new();

    for prefix in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let trimmed = prefix.trim_end_matches('/');
        if !prefix.starts_with('/')
            || trimmed.is_empty()
            || trimmed.contains("//")
            || trimmed.contains(ROUTE_SYNTAX)
            || trimmed.contains(char::is_whitespace)
        {
            return Err(ConfigError::InvalidPrefix(prefix.to_string()));
        }

        if let Some(existing) = prefixes.iter().find(|p| overlaps(p, trimmed)) {
            return Err(ConfigError::OverlappingPrefix(
                existing.clone(),
                prefix.to_string(),
            ));
        }

        let is_page = RouteTable::application()
            .iter()
            .any(|route| route.path == trimmed || is_under(route.path, trimmed));
        if is_page || overlaps(ASSETS_PREFIX, trimmed) {
            return Err(ConfigError::ReservedPrefix(prefix.to_string()));
        }

        prefixes.push(trimmed.to_string());
    }

    Ok(prefixes)
}

/// Whether `path` is a sub-path of `prefix`
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn overlaps(a: &str, b: &str) -> bool {
    a == b || is_under(a, b) || is_under(b, a)
}
