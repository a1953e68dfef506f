use anyhow::Result;
use clap::Args;
use clinic_site_lib::validation;
use clinic_site_lib::{ListingView, NewsBoard, NewsFilter, SiteClient};

use crate::output::{format_controls, print_articles, OutputFormat};

#[derive(Args)]
pub struct ArticlesArgs {
    /// Case-insensitive search on title and excerpt
    #[arg(long)]
    pub search: Option<String>,

    /// Only articles in this category ("Tất cả" for every category)
    #[arg(long)]
    pub category: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Articles per page (defaults to the news page size)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// List featured articles instead of the paginated listing
    #[arg(long)]
    pub featured: bool,

    /// List the available categories and exit
    #[arg(long)]
    pub categories: bool,
}

pub async fn run(args: &ArticlesArgs, client: &SiteClient, format: &OutputFormat) -> Result<()> {
    let page = validation::validate_page(args.page)?;

    let mut board = client.news_board().await;
    if let Some(size) = args.page_size {
        let size = validation::validate_page_size(size)?;
        board = NewsBoard::new(board.articles().to_vec(), size);
    }

    if args.categories {
        for category in board.categories() {
            println!("{}", category);
        }
        return Ok(());
    }

    let mut filter = NewsFilter::default();
    if let Some(search) = &args.search {
        filter = filter.with_search(&validation::validate_search(search)?);
    }
    if let Some(category) = &args.category {
        filter = filter.with_category(category);
    }
    board.apply_filter(filter);

    if args.featured {
        let featured: Vec<_> = board.featured().into_iter().cloned().collect();
        eprintln!("{} featured articles", featured.len());
        return print_articles(&featured, format);
    }

    if !board.listing_mut().go_to_page(page) {
        tracing::warn!(
            "Page {} is out of range (1-{}), showing page {}",
            page,
            board.listing().total_pages().max(1),
            board.listing().current_page()
        );
    }

    match board.listing().view() {
        ListingView::Empty => {
            eprintln!("Không tìm thấy bài viết nào phù hợp");
        }
        ListingView::Page {
            items,
            controls,
            summary,
        } => {
            eprintln!("{}", summary);
            print_articles(items, format)?;
            if let Some(controls) = controls {
                eprintln!("{}", format_controls(&controls));
            }
        }
    }

    Ok(())
}
