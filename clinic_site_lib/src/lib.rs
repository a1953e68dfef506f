//! Site layer for the clinic: articles, news listing, page content with
//! fallbacks, lead submission and sitemap generation.
//!
//! Wraps the `clinic_cms_api` content client with the site's queries, and
//! adds the pure pieces that need no network: in-memory pagination, search
//! and category filtering, and input validation.

pub mod article;
pub mod client;
pub mod config;
pub mod error;
pub mod lead;
pub mod listing;
pub mod news;
pub mod pages;
pub mod sitemap;
pub mod validation;

pub use clinic_cms_api;
pub use clinic_cms_api::types;
pub use clinic_cms_api::{ClientConfig, Envelope, RequestOptions};

pub use article::{Article, ArticleDetail};
pub use client::SiteClient;
pub use config::SiteConfig;
pub use error::SiteError;
pub use lead::{LeadForm, LeadFormState, LeadOutcome, LeadStatus, LeadSubmission};
pub use listing::{Listing, ListingView, PageControls, PageLink, PageSummary};
pub use news::{NewsBoard, NewsFilter};
pub use pages::{PageContent, PageKind, PageSection, Section, SectionSource};
pub use sitemap::{ChangeFrequency, SitemapEntry};
