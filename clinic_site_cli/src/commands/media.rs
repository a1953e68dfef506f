use anyhow::{bail, Result};
use clap::Args;
use clinic_site_lib::SiteClient;

#[derive(Args)]
pub struct MediaArgs {
    /// Media path or URL as stored in the backend, e.g. /uploads/a.jpg
    pub path: String,
}

pub fn run(args: &MediaArgs, client: &SiteClient) -> Result<()> {
    let path = args.path.trim();
    if path.is_empty() {
        bail!("No media path given");
    }
    if let Some(url) = client.inner().media_url(Some(path)) {
        println!("{}", url);
    }
    Ok(())
}
