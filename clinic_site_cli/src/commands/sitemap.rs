use anyhow::Result;
use clap::Args;
use clinic_site_lib::SiteClient;

use crate::output::{print_sitemap, OutputFormat};

#[derive(Args)]
pub struct SitemapArgs {
    /// Emit sitemaps.org XML regardless of --output
    #[arg(long)]
    pub xml: bool,
}

pub async fn run(args: &SitemapArgs, client: &SiteClient, format: &OutputFormat) -> Result<()> {
    let entries = client.sitemap_entries().await;
    tracing::info!("{} sitemap entries", entries.len());
    let format = if args.xml { &OutputFormat::Xml } else { format };
    print_sitemap(&entries, format)
}
