//! Client for the clinic's headless content backend.
//!
//! Serializes structured queries into the backend's bracketed query-string
//! format, fetches documents into an [`Envelope`] that is always either a
//! success or a failure, resolves relative media paths against the backend
//! origin, and posts new entries such as contact leads.

mod cache;
mod client;
mod config;
mod envelope;
mod errors;
mod media;
mod query;
pub mod types;
pub use self::client::{Client, RequestOptions, Revalidate};
pub use self::config::{ClientConfig, DEFAULT_BASE_URL};
pub use self::envelope::Envelope;
pub use self::errors::Error;
pub use self::media::resolve_media_url;
pub use self::query::{ContentQuery, Filter, FilterOp, PageBounds, Populate, Sort, SortDirection};
