//! Site-level wrapper around the content client.
//!
//! Knows which collections and single types the site reads, how each is
//! queried, and what to show when a fetch comes back empty.

use chrono::Utc;
use clinic_cms_api::{
    Client, ClientConfig, ContentQuery, Envelope, RequestOptions, SortDirection,
};
use serde_json::Value;

use crate::article::{Article, ArticleDetail};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::lead::{LeadFormState, LeadOutcome, LeadSubmission, LEAD_PATH};
use crate::news::NewsBoard;
use crate::pages::{PageContent, PageKind};
use crate::sitemap::{build_sitemap, SitemapArticle, SitemapEntry, SITEMAP_ARTICLE_LIMIT};
use crate::validation::validate_slug;

pub const ARTICLES_PATH: &str = "/articles";

/// Newest-first listing size for the news page.
const ARTICLE_LIST_LIMIT: u32 = 100;
/// How many other articles an article page links to.
const RELATED_LIMIT: u32 = 3;
/// Populate depth for single types and article detail.
const DEEP_POPULATE: u8 = 5;

/// Content client bound to the site's collections.
pub struct SiteClient {
    inner: Client,
    site: SiteConfig,
}

impl SiteClient {
    pub fn new(config: ClientConfig, site: SiteConfig) -> Result<Self, SiteError> {
        Ok(Self {
            inner: Client::new(config)?,
            site,
        })
    }

    /// Creates a client against a custom backend origin. Used for testing.
    pub fn with_base_url(base_url: &str) -> Result<Self, SiteError> {
        Self::new(ClientConfig::new(base_url), SiteConfig::default())
    }

    pub fn inner(&self) -> &Client {
        &self.inner
    }

    pub fn site_config(&self) -> &SiteConfig {
        &self.site
    }

    fn article_list_query() -> ContentQuery {
        ContentQuery::default()
            .with_sort("publishedDate", SortDirection::Desc)
            .with_page_size(ARTICLE_LIST_LIMIT)
            .with_relation("featured_image")
    }

    /// All listed articles, newest first, with their featured image.
    pub async fn fetch_articles(&self) -> Envelope<Vec<Article>> {
        self.inner
            .fetch_content(
                ARTICLES_PATH,
                &Self::article_list_query(),
                &RequestOptions::default(),
            )
            .await
    }

    /// The news board over every article. A failed fetch gives an empty board.
    pub async fn news_board(&self) -> NewsBoard {
        let articles = self.fetch_articles().await.into_data().unwrap_or_default();
        NewsBoard::new(articles, self.site.news_page_size)
    }

    /// Looks up an article by slug along with up to three other recent
    /// articles. `Ok(None)` means no article has that slug.
    pub async fn fetch_article(&self, slug: &str) -> Result<Option<ArticleDetail>, SiteError> {
        let slug = validate_slug(slug)?;
        let detail_query = ContentQuery::default()
            .with_eq("slug", &slug)
            .with_populate_depth(DEEP_POPULATE);
        let related_query = ContentQuery::default()
            .with_ne("slug", &slug)
            .with_page_size(RELATED_LIMIT)
            .with_sort("publishedDate", SortDirection::Desc);

        let options = RequestOptions::default();
        let (detail, related) = tokio::join!(
            self.inner
                .fetch_content::<Vec<Article>>(ARTICLES_PATH, &detail_query, &options),
            self.inner
                .fetch_content::<Vec<Article>>(ARTICLES_PATH, &related_query, &options),
        );

        let detail = detail.into_result()?;
        let Some(article) = detail.data.and_then(|list| list.into_iter().next()) else {
            tracing::info!("No article with slug '{}'", slug);
            return Ok(None);
        };
        let related = related.into_data().unwrap_or_default();
        Ok(Some(ArticleDetail { article, related }))
    }

    /// A single-type page. Anything missing, including the whole document,
    /// is filled with built-in copy.
    pub async fn fetch_page(&self, kind: PageKind) -> PageContent {
        let query = ContentQuery::default().with_populate_depth(DEEP_POPULATE);
        let envelope = self
            .inner
            .fetch_content::<Value>(kind.api_path(), &query, &RequestOptions::default())
            .await;
        PageContent::from_document(kind, envelope.data())
    }

    /// Posts a validated lead. Every failure collapses into `Failed`.
    pub async fn submit_lead(&self, lead: &LeadSubmission) -> LeadOutcome {
        match self.inner.create_entry(LEAD_PATH, lead).await {
            Ok(()) => LeadOutcome::Submitted,
            Err(e) => {
                tracing::warn!("Lead submission failed: {}", e);
                LeadOutcome::Failed
            }
        }
    }

    /// Runs a full submit cycle on `state`. Validation errors are returned
    /// before any request is made.
    pub async fn submit_form(&self, state: &mut LeadFormState) -> Result<LeadOutcome, SiteError> {
        let submission = state.begin_submit()?;
        let outcome = self.submit_lead(&submission).await;
        state.finish(outcome);
        Ok(outcome)
    }

    /// Static pages plus every article. If the article fetch fails the
    /// static pages are still returned.
    pub async fn sitemap_entries(&self) -> Vec<SitemapEntry> {
        let query = ContentQuery::default()
            .with_fields(&["slug", "updatedAt", "publishedDate"])
            .with_page_size(SITEMAP_ARTICLE_LIMIT);
        let articles = self
            .inner
            .fetch_content::<Vec<SitemapArticle>>(ARTICLES_PATH, &query, &RequestOptions::default())
            .await;
        if let Some(e) = articles.error() {
            tracing::warn!("Sitemap lists static pages only: {}", e);
        }
        let articles = articles.into_data().unwrap_or_default();
        build_sitemap(&self.site.site_url, &articles, Utc::now())
    }
}
