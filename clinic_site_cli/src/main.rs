mod commands;
mod output;
mod xml_output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clinic_site_lib::{ClientConfig, SiteClient, SiteConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "clinic-site")]
#[command(about = "Browse the clinic site's content backend from the command line")]
struct Cli {
    /// Output format: table, json, csv, markdown or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Backend origin (overrides STRAPI_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Public site origin for sitemap URLs (overrides SITE_URL)
    #[arg(long, global = true)]
    site_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List news articles page by page
    Articles(commands::articles::ArticlesArgs),
    /// Show one article and its related articles
    Article(commands::article::ArticleArgs),
    /// Show a page's sections, with built-in copy for missing ones
    Page(commands::page::PageArgs),
    /// Submit a contact lead
    Contact(commands::contact::ContactArgs),
    /// List sitemap entries
    Sitemap(commands::sitemap::SitemapArgs),
    /// Resolve a media path against the backend origin
    Media(commands::media::MediaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_site=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    let mut site = SiteConfig::from_env();
    if let Some(site_url) = &cli.site_url {
        site = site.with_site_url(site_url);
    }
    let client = SiteClient::new(config, site)?;

    match &cli.command {
        Commands::Articles(args) => commands::articles::run(args, &client, &format).await?,
        Commands::Article(args) => commands::article::run(args, &client, &format).await?,
        Commands::Page(args) => commands::page::run(args, &client, &format).await?,
        Commands::Contact(args) => commands::contact::run(args, &client).await?,
        Commands::Sitemap(args) => commands::sitemap::run(args, &client, &format).await?,
        Commands::Media(args) => commands::media::run(args, &client)?,
    }

    Ok(())
}
