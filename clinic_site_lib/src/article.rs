//! News articles as returned by the `/articles` collection.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clinic_cms_api::resolve_media_url;
use clinic_cms_api::types::Media;
use serde::{Deserialize, Deserializer, Serialize};

/// Shown when an article has no author.
pub const DEFAULT_AUTHOR: &str = "Admin";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Missing or `null` identity fields decode as empty strings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    /// Editorial publication date. Accepts both `2025-03-10` and full timestamps.
    #[serde(default, deserialize_with = "lenient_date")]
    pub published_date: Option<NaiveDate>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Rendered HTML body; only present on detail lookups.
    pub content: Option<String>,
    #[serde(rename = "featured_image")]
    pub featured_image: Option<Media>,
}

impl Article {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    pub fn author_name(&self) -> &str {
        match self.author.as_deref().map(str::trim) {
            Some(author) if !author.is_empty() => author,
            _ => DEFAULT_AUTHOR,
        }
    }

    pub fn excerpt_text(&self) -> &str {
        self.excerpt.as_deref().unwrap_or("")
    }

    /// `publishedDate`, then `publishedAt`, then `createdAt`.
    pub fn display_date(&self) -> Option<NaiveDate> {
        self.published_date
            .or_else(|| self.published_at.map(|d| d.date_naive()))
            .or_else(|| self.created_at.map(|d| d.date_naive()))
    }

    /// `updatedAt`, then `publishedDate` at midnight UTC.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or_else(|| {
            self.published_date
                .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        })
    }

    /// Absolute URL of the featured image, resolved against `origin`.
    pub fn image_url(&self, origin: &str) -> Option<String> {
        resolve_media_url(origin, self.featured_image.as_ref().map(|m| m.url.as_str()))
    }

    /// Site route of the article page.
    pub fn route(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// An article page: the article itself and a few other recent articles.
#[derive(Serialize, Debug, Clone)]
pub struct ArticleDetail {
    pub article: Article,
    pub related: Vec<Article>,
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(ts.with_timezone(&Utc).date_naive()));
    }
    tracing::warn!("Ignoring unparseable publishedDate '{}'", raw);
    Ok(None)
}
