//! Site-wide settings that are not part of the backend connection.

/// Public origin used for sitemap URLs when `SITE_URL` is not set.
pub const DEFAULT_SITE_URL: &str = "https://dichvuthammyuytin.com";

/// Articles per page on the news listing.
pub const NEWS_PAGE_SIZE: usize = 9;

#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Public origin of the site, without a trailing slash.
    pub site_url: String,
    pub news_page_size: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            news_page_size: NEWS_PAGE_SIZE,
        }
    }
}

impl SiteConfig {
    /// Reads `SITE_URL`; empty counts as unset.
    pub fn from_env() -> Self {
        match std::env::var("SITE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::default().with_site_url(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_site_url(mut self, site_url: &str) -> Self {
        self.site_url = site_url.trim_end_matches('/').to_string();
        self
    }
}
