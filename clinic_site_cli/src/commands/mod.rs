//! CLI subcommand implementations.

pub mod article;
pub mod articles;
pub mod contact;
pub mod media;
pub mod page;
pub mod sitemap;
