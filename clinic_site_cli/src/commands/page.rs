use anyhow::Result;
use clap::Args;
use clinic_site_lib::{PageKind, SiteClient};

use crate::output::{print_page, OutputFormat};

#[derive(Args)]
pub struct PageArgs {
    /// home, services, news, about or contact (or the route, e.g. dich-vu)
    pub name: String,
}

pub async fn run(args: &PageArgs, client: &SiteClient, format: &OutputFormat) -> Result<()> {
    let kind: PageKind = args.name.parse()?;
    let page = client.fetch_page(kind).await;

    let fallbacks = page.fallback_count();
    if fallbacks > 0 {
        eprintln!(
            "{} of {} sections use built-in copy",
            fallbacks,
            page.sections.len()
        );
    }
    print_page(&page, format)
}
