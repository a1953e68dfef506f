//! HTTP client for the content backend's REST API.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    cache::MemoryCache,
    media::resolve_media_url,
    types::{Document, ErrorBody},
    ClientConfig, ContentQuery, Envelope, Error,
};

/// How long a response may be served from memory before it is fetched again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Revalidate {
    /// Use the client's configured freshness window.
    #[default]
    Default,
    /// Keep the response for this long. A zero duration behaves like `NoStore`.
    After(Duration),
    /// Always hit the network and never store the response.
    NoStore,
}

/// Per-call overrides for caching and timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestOptions {
    pub revalidate: Revalidate,
    /// Replaces the client-wide timeout for this request.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn no_store() -> Self {
        Self {
            revalidate: Revalidate::NoStore,
            timeout: None,
        }
    }

    pub fn revalidate_after(duration: Duration) -> Self {
        Self {
            revalidate: Revalidate::After(duration),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn ttl(&self, default: Duration) -> Option<Duration> {
        let ttl = match self.revalidate {
            Revalidate::Default => default,
            Revalidate::After(duration) => duration,
            Revalidate::NoStore => return None,
        };
        Some(ttl).filter(|ttl| !ttl.is_zero())
    }
}

#[derive(Serialize)]
struct EntryPayload<'a, B> {
    data: &'a B,
}

/// Client for the content backend.
///
/// Requests go to `{base_url}/api{path}` with `Content-Type: application/json`
/// and, when a token is configured, `Authorization: Bearer <token>`. Successful
/// GET bodies are kept in memory for the configured freshness window.
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
    cache: MemoryCache,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e.to_string())
            })?;
        Ok(Self {
            cache: MemoryCache::new(),
            config,
            http,
        })
    }

    /// Creates a client with default settings against a custom origin. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::new(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves a media path from a content payload against the backend origin.
    pub fn media_url(&self, path: Option<&str>) -> Option<String> {
        resolve_media_url(&self.config.base_url, path)
    }

    fn get_url(&self, path: &str, query: &ContentQuery) -> Result<Url, Error> {
        let sep = if path.starts_with('/') { "" } else { "/" };
        let url = Url::parse(format!("{}/api{}{}", &self.config.base_url, sep, path).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidUrl(e.to_string())
            })?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches `path` with `query` and decodes the body's `data` as `T`.
    ///
    /// Never fails outright: every error is returned as [`Envelope::Failure`].
    pub async fn fetch_content<T>(
        &self,
        path: &str,
        query: &ContentQuery,
        options: &RequestOptions,
    ) -> Envelope<T>
    where
        T: DeserializeOwned,
    {
        let result = self.try_fetch(path, query, options).await;
        if let Err(e) = &result {
            tracing::warn!("Fetching {} failed: {}", path, e);
        }
        result.into()
    }

    async fn try_fetch<T>(
        &self,
        path: &str,
        query: &ContentQuery,
        options: &RequestOptions,
    ) -> Result<Document<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, query)?;
        let ttl = options.ttl(self.config.revalidate);
        let cache_key = url.to_string();

        if ttl.is_some() {
            if let Some(cached) = self.cache.get(&cache_key) {
                tracing::debug!("Cache hit: {}", url);
                return decode(&cached);
            }
        }

        tracing::debug!("GET {}", url);
        let body = self.get_body(url, options.timeout).await?;
        let doc = decode(&body)?;
        if let Some(ttl) = ttl {
            self.cache.set_with_ttl(cache_key, body, ttl);
        }
        Ok(doc)
    }

    async fn get_body(&self, url: Url, timeout: Option<Duration>) -> Result<String, Error> {
        let mut req = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::from_reqwest(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from_reqwest(e)
        })?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        Ok(body)
    }

    /// Creates an entry in the collection at `path` by posting `{ "data": data }`.
    ///
    /// Any 2xx status is success. Responses are never cached.
    pub async fn create_entry<B>(&self, path: &str, data: &B) -> Result<(), Error>
    where
        B: Serialize,
    {
        let url = self.get_url(path, &ContentQuery::default())?;
        tracing::debug!("POST {}", url);

        let mut req = self.http.post(url).json(&EntryPayload { data });
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to create entry: {}", e);
            Error::from_reqwest(e)
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), &body))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<Document<T>, Error> {
    serde_json::from_str::<Document<T>>(body).map_err(|e| {
        tracing::error!(
            "Failed to parse resource: {} | body: {}",
            e,
            truncate_body(body)
        );
        Error::Decode(e.to_string())
    })
}

fn status_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => {
            tracing::error!(
                "Backend error {} {}: {}",
                status,
                parsed.error.name,
                parsed.error.message
            );
            Error::Backend {
                status,
                name: parsed.error.name,
                message: parsed.error.message,
                details: parsed.error.details,
            }
        }
        Err(_) => {
            let snippet = truncate_body(body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            Error::HttpStatus {
                status,
                body: snippet,
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_resolution() {
        let default = Duration::from_secs(60);
        assert_eq!(RequestOptions::default().ttl(default), Some(default));
        assert_eq!(RequestOptions::no_store().ttl(default), None);
        assert_eq!(
            RequestOptions::revalidate_after(Duration::from_secs(5)).ttl(default),
            Some(Duration::from_secs(5))
        );
        assert_eq!(
            RequestOptions::revalidate_after(Duration::ZERO).ttl(default),
            None
        );
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "ă".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());
    }

    #[test]
    fn status_error_prefers_backend_body() {
        let body = r#"{"data":null,"error":{"status":404,"name":"NotFoundError","message":"Not Found","details":{}}}"#;
        match status_error(404, body) {
            Error::Backend { status, name, .. } => {
                assert_eq!(status, 404);
                assert_eq!(name, "NotFoundError");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            status_error(502, "Bad Gateway"),
            Error::HttpStatus { status: 502, .. }
        ));
    }

    #[test]
    fn get_url_joins_api_prefix() {
        let client = Client::with_base_url("http://127.0.0.1:1337/").unwrap();
        let url = client
            .get_url("/articles", &ContentQuery::default().with_page(2))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:1337/api/articles?pagination[page]=2"
        );
    }

    #[test]
    fn get_url_adds_missing_slash() {
        let client = Client::with_base_url("http://127.0.0.1:1337").unwrap();
        let url = client
            .get_url("articles", &ContentQuery::default())
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1337/api/articles");
    }
}
