//! Sitemap entries: the fixed site pages plus one entry per article.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::article::{lenient_date, null_as_default};
use crate::pages::PageKind;

/// Most articles listed in one sitemap.
pub const SITEMAP_ARTICLE_LIMIT: u32 = 1000;

pub const ARTICLE_PRIORITY: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

/// The projection of an article the sitemap asks for.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapArticle {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub published_date: Option<NaiveDate>,
}

impl SitemapArticle {
    /// `updatedAt`, then `publishedDate`, then `now`.
    pub fn last_modified(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.updated_at
            .or_else(|| {
                self.published_date
                    .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            })
            .unwrap_or(now)
    }
}

fn page_url(site_url: &str, route: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    if route == "/" {
        site_url.to_string()
    } else {
        format!("{}{}", site_url, route)
    }
}

/// Home, services, news, contact and about, stamped with `now`.
pub fn static_entries(site_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    [
        (PageKind::Home, ChangeFrequency::Monthly, 1.0),
        (PageKind::Services, ChangeFrequency::Monthly, 0.8),
        (PageKind::News, ChangeFrequency::Weekly, 0.8),
        (PageKind::Contact, ChangeFrequency::Yearly, 0.5),
        (PageKind::About, ChangeFrequency::Yearly, 0.5),
    ]
    .into_iter()
    .map(|(kind, change_frequency, priority)| SitemapEntry {
        loc: page_url(site_url, kind.route()),
        last_modified: now,
        change_frequency,
        priority,
    })
    .collect()
}

/// One weekly entry per article at `{site_url}/{slug}`. Articles with an
/// empty slug are skipped.
pub fn article_entries(
    site_url: &str,
    articles: &[SitemapArticle],
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    articles
        .iter()
        .filter(|a| !a.slug.trim().is_empty())
        .map(|a| SitemapEntry {
            loc: page_url(site_url, &format!("/{}", a.slug.trim())),
            last_modified: a.last_modified(now),
            change_frequency: ChangeFrequency::Weekly,
            priority: ARTICLE_PRIORITY,
        })
        .collect()
}

/// Static pages followed by article pages.
pub fn build_sitemap(
    site_url: &str,
    articles: &[SitemapArticle],
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let mut entries = static_entries(site_url, now);
    entries.extend(article_entries(site_url, articles, now));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SITE: &str = "https://dichvuthammyuytin.com";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn static_pages_in_order() {
        let entries = static_entries(SITE, now());
        let locs: Vec<&str> = entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://dichvuthammyuytin.com",
                "https://dichvuthammyuytin.com/dich-vu",
                "https://dichvuthammyuytin.com/tin-tuc",
                "https://dichvuthammyuytin.com/lien-he",
                "https://dichvuthammyuytin.com/ve-chung-toi",
            ]
        );
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[2].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(entries[4].change_frequency, ChangeFrequency::Yearly);
        assert!(entries.iter().all(|e| e.last_modified == now()));
    }

    #[test]
    fn article_lastmod_fallbacks() {
        let articles: Vec<SitemapArticle> = serde_json::from_value(serde_json::json!([
            { "slug": "a", "updatedAt": "2025-05-02T08:00:00.000Z", "publishedDate": "2025-04-01" },
            { "slug": "b", "updatedAt": null, "publishedDate": "2025-04-01" },
            { "slug": "c" },
            { "slug": "" },
            { "slug": null, "updatedAt": "2025-05-02T08:00:00.000Z" }
        ]))
        .unwrap();
        assert_eq!(articles.len(), 5);
        let entries = article_entries(&format!("{}/", SITE), &articles, now());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].loc, "https://dichvuthammyuytin.com/a");
        assert_eq!(
            entries[0].last_modified,
            Utc.with_ymd_and_hms(2025, 5, 2, 8, 0, 0).unwrap()
        );
        assert_eq!(
            entries[1].last_modified,
            Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(entries[2].last_modified, now());
        assert!(entries.iter().all(|e| e.priority == ARTICLE_PRIORITY));
    }

    #[test]
    fn build_appends_articles() {
        let articles = vec![SitemapArticle {
            slug: "x".to_string(),
            updated_at: None,
            published_date: None,
        }];
        let entries = build_sitemap(SITE, &articles, now());
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[5].loc, "https://dichvuthammyuytin.com/x");
    }
}
