use anyhow::Result;
use chrono::SecondsFormat;
use clinic_site_lib::{Article, PageContent, PageControls, PageLink, SitemapEntry};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            "xml" => OutputFormat::Xml,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct ArticleRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Author")]
    #[serde(rename = "Author")]
    author: String,
    #[tabled(rename = "Featured")]
    #[serde(rename = "Featured")]
    featured: String,
}

#[derive(Tabled, Serialize)]
struct SectionRow {
    #[tabled(rename = "Section")]
    #[serde(rename = "Section")]
    key: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct SitemapRow {
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    loc: String,
    #[tabled(rename = "Last Modified")]
    #[serde(rename = "Last Modified")]
    last_modified: String,
    #[tabled(rename = "Change Frequency")]
    #[serde(rename = "Change Frequency")]
    change_frequency: String,
    #[tabled(rename = "Priority")]
    #[serde(rename = "Priority")]
    priority: String,
}

// -- Row builders --

fn build_article_rows(articles: &[Article]) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|a| ArticleRow {
            date: a
                .display_date()
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
            title: a.title.clone(),
            slug: a.slug.clone(),
            category: a.category.clone().unwrap_or_default(),
            author: a.author_name().to_string(),
            featured: if a.is_featured() { "yes" } else { "" }.to_string(),
        })
        .collect()
}

fn build_section_rows(page: &PageContent) -> Vec<SectionRow> {
    page.sections
        .iter()
        .map(|s| SectionRow {
            key: s.key.to_string(),
            source: serde_json::to_value(s.source)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default(),
            title: s.section.title_text().to_string(),
            description: truncate(s.section.description_text(), 80),
        })
        .collect()
}

fn build_sitemap_rows(entries: &[SitemapEntry]) -> Vec<SitemapRow> {
    entries
        .iter()
        .map(|e| SitemapRow {
            loc: e.loc.clone(),
            last_modified: e
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            change_frequency: e.change_frequency.to_string(),
            priority: format_priority(e.priority),
        })
        .collect()
}

// -- Generic renderers --

fn render_table<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows).to_string()
}

fn render_markdown<R: Tabled>(rows: Vec<R>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    table.to_string()
}

fn write_csv<R: Serialize, W: std::io::Write>(rows: Vec<R>, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_rows<R, T>(rows: Vec<R>, raw: &T, root: &str, item: &str, format: &OutputFormat) -> Result<()>
where
    R: Tabled + Serialize,
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => println!("{}", render_table(rows)),
        OutputFormat::Markdown => println!("{}", render_markdown(rows)),
        OutputFormat::Csv => write_csv(rows, std::io::stdout())?,
        OutputFormat::Json => print_json(raw),
        OutputFormat::Xml => println!("{}", xml_output::items_to_xml(root, item, &rows)?),
    }
    Ok(())
}

// -- Entry points --

pub fn print_articles(articles: &[Article], format: &OutputFormat) -> Result<()> {
    print_rows(build_article_rows(articles), articles, "articles", "article", format)
}

pub fn print_page(page: &PageContent, format: &OutputFormat) -> Result<()> {
    print_rows(build_section_rows(page), page, "sections", "section", format)
}

/// Sitemap output. XML is the sitemaps.org document rather than a row dump.
pub fn print_sitemap(entries: &[SitemapEntry], format: &OutputFormat) -> Result<()> {
    if *format == OutputFormat::Xml {
        println!("{}", xml_output::sitemap_to_xml(entries)?);
        return Ok(());
    }
    print_rows(build_sitemap_rows(entries), entries, "urls", "url", format)
}

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Page-number row such as `‹ 1 ... 4 [5] 6 ... 10 ›`. Disabled arrows are
/// left out.
pub fn format_controls(controls: &PageControls) -> String {
    let mut parts = Vec::new();
    if controls.previous_enabled {
        parts.push("‹".to_string());
    }
    for link in &controls.links {
        match link {
            PageLink::Page(n) if *n == controls.current => parts.push(format!("[{}]", n)),
            other => parts.push(other.to_string()),
        }
    }
    if controls.next_enabled {
        parts.push("›".to_string());
    }
    parts.join(" ")
}

fn format_priority(priority: f64) -> String {
    format!("{:.1}", priority)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
