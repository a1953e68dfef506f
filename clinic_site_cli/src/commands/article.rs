use anyhow::{bail, Result};
use clap::Args;
use clinic_site_lib::SiteClient;

use crate::output::{print_articles, print_json, OutputFormat};

#[derive(Args)]
pub struct ArticleArgs {
    /// Article slug, e.g. cham-soc-vung-kin-sau-laser
    pub slug: String,
}

pub async fn run(args: &ArticleArgs, client: &SiteClient, format: &OutputFormat) -> Result<()> {
    let Some(detail) = client.fetch_article(&args.slug).await? else {
        bail!("Article not found: {}", args.slug);
    };

    if *format == OutputFormat::Json {
        print_json(&detail);
        return Ok(());
    }

    let article = &detail.article;
    print_articles(std::slice::from_ref(article), format)?;
    if let Some(image) = article.image_url(&client.inner().config().base_url) {
        eprintln!("Image: {}", image);
    }
    if !detail.related.is_empty() {
        eprintln!("Related articles:");
        print_articles(&detail.related, format)?;
    }

    Ok(())
}
