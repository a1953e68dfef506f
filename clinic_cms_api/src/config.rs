//! Connection settings for the content backend.

use std::time::Duration;

/// Origin used when `STRAPI_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:1337";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REVALIDATE_SECS: u64 = 60;

/// Backend origin, optional bearer token, request timeout and default
/// freshness window for cached responses.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend origin without the `/api` prefix, e.g. `http://127.0.0.1:1337`.
    /// Media paths are resolved against it too.
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub token: Option<String>,
    pub timeout: Duration,
    /// How long a successful response is served from memory.
    pub revalidate: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            revalidate: Duration::from_secs(DEFAULT_REVALIDATE_SECS),
        }
    }

    /// Reads `STRAPI_URL`, `STRAPI_TOKEN`, `STRAPI_TIMEOUT_SECS` and
    /// `STRAPI_REVALIDATE_SECS`. Empty values count as unset.
    pub fn from_env() -> Self {
        let base_url = env_string("STRAPI_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url)
            .with_timeout(Duration::from_secs(env_u64(
                "STRAPI_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )))
            .with_revalidate(Duration::from_secs(env_u64(
                "STRAPI_REVALIDATE_SECS",
                DEFAULT_REVALIDATE_SECS,
            )));
        config.token = env_string("STRAPI_TOKEN");
        config
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string()).filter(|t| !t.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
