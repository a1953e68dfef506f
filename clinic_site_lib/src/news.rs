//! The news board: search and category filtering over the article list,
//! feeding a paginated [`Listing`].

use crate::article::Article;
use crate::listing::Listing;

/// Label of the pseudo-category that matches every article.
pub const ALL_CATEGORIES: &str = "Tất cả";

/// Search term and category chosen by the reader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsFilter {
    pub search: String,
    /// `None` matches every category.
    pub category: Option<String>,
}

impl NewsFilter {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.trim().to_string();
        self
    }

    /// Selects a category; [`ALL_CATEGORIES`] or an empty string clears it.
    pub fn with_category(mut self, category: &str) -> Self {
        let category = category.trim();
        self.category = if category.is_empty() || category == ALL_CATEGORIES {
            None
        } else {
            Some(category.to_string())
        };
        self
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some()
    }

    /// Case-insensitive substring match on title or excerpt, combined with
    /// an exact category match.
    pub fn matches(&self, article: &Article) -> bool {
        let category_ok = match &self.category {
            None => true,
            Some(category) => article.category.as_deref() == Some(category.as_str()),
        };
        if !category_ok {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        article.title.to_lowercase().contains(&needle)
            || article.excerpt_text().to_lowercase().contains(&needle)
    }
}

/// Articles matching `filter`, in their original order.
pub fn filter_articles(articles: &[Article], filter: &NewsFilter) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| filter.matches(a))
        .cloned()
        .collect()
}

/// [`ALL_CATEGORIES`] followed by each distinct category in first-seen order.
pub fn categories(articles: &[Article]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for category in articles.iter().filter_map(|a| a.category.as_deref()) {
        let category = category.trim();
        if !category.is_empty() && !out.iter().any(|c| c == category) {
            out.push(category.to_string());
        }
    }
    out
}

/// The full article list plus the filtered, paginated view of it.
pub struct NewsBoard {
    articles: Vec<Article>,
    filter: NewsFilter,
    listing: Listing<Article>,
}

impl NewsBoard {
    pub fn new(articles: Vec<Article>, page_size: usize) -> Self {
        let listing = Listing::new(articles.clone(), page_size);
        Self {
            articles,
            filter: NewsFilter::default(),
            listing,
        }
    }

    /// Re-filters the articles. The listing goes back to page 1 whenever the
    /// filter actually changes.
    pub fn apply_filter(&mut self, filter: NewsFilter) {
        if filter == self.filter {
            return;
        }
        self.listing.set_items(filter_articles(&self.articles, &filter));
        self.filter = filter;
    }

    pub fn filter(&self) -> &NewsFilter {
        &self.filter
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn listing(&self) -> &Listing<Article> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing<Article> {
        &mut self.listing
    }

    /// Featured articles, shown only while no search or category is applied.
    pub fn featured(&self) -> Vec<&Article> {
        if self.filter.is_active() {
            return Vec::new();
        }
        self.articles.iter().filter(|a| a.is_featured()).collect()
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingView;

    fn article(slug: &str, title: &str, excerpt: &str, category: &str, featured: bool) -> Article {
        serde_json::from_value(serde_json::json!({
            "documentId": format!("doc-{}", slug),
            "slug": slug,
            "title": title,
            "excerpt": excerpt,
            "category": category,
            "featured": featured,
        }))
        .unwrap()
    }

    fn sample() -> Vec<Article> {
        vec![
            article("a", "Làm hồng vùng kín", "Laser CO2", "Dịch vụ", true),
            article("b", "Chăm sóc sau LASER", "Bảy ngày đầu", "Chăm sóc", false),
            article("c", "Trẻ hóa", "Collagen và độ ẩm", "Kiến thức", true),
            article("d", "Hỏi đáp", "Câu hỏi thường gặp", "Chăm sóc", false),
        ]
    }

    #[test]
    fn search_is_case_insensitive_on_title_and_excerpt() {
        let filter = NewsFilter::default().with_search("laser");
        let slugs: Vec<String> = filter_articles(&sample(), &filter)
            .into_iter()
            .map(|a| a.slug)
            .collect();
        assert_eq!(slugs, vec!["a", "b"]);

        let filter = NewsFilter::default().with_search("COLLAGEN");
        assert_eq!(filter_articles(&sample(), &filter).len(), 1);
    }

    #[test]
    fn search_handles_vietnamese_case() {
        let filter = NewsFilter::default().with_search("LÀM HỒNG");
        assert_eq!(filter_articles(&sample(), &filter).len(), 1);
    }

    #[test]
    fn category_and_search_combine() {
        let filter = NewsFilter::default()
            .with_category("Chăm sóc")
            .with_search("hỏi");
        let matched = filter_articles(&sample(), &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].slug, "d");
    }

    #[test]
    fn all_category_clears_selection() {
        let filter = NewsFilter::default().with_category(ALL_CATEGORIES);
        assert!(filter.category.is_none());
        assert!(!filter.is_active());
        assert_eq!(filter_articles(&sample(), &filter).len(), 4);
    }

    #[test]
    fn categories_are_distinct_in_order() {
        assert_eq!(
            categories(&sample()),
            vec![ALL_CATEGORIES, "Dịch vụ", "Chăm sóc", "Kiến thức"]
        );
    }

    #[test]
    fn featured_hidden_while_filtering() {
        let mut board = NewsBoard::new(sample(), 9);
        assert_eq!(board.featured().len(), 2);
        board.apply_filter(NewsFilter::default().with_search("trẻ"));
        assert!(board.featured().is_empty());
    }

    #[test]
    fn new_filter_resets_page() {
        let articles: Vec<Article> = (0..20)
            .map(|i| article(&format!("s{}", i), &format!("Bài {}", i), "", "Chăm sóc", false))
            .collect();
        let mut board = NewsBoard::new(articles, 9);
        assert!(board.listing_mut().go_to_page(3));

        board.apply_filter(NewsFilter::default().with_search("bài 1"));
        assert_eq!(board.listing().current_page(), 1);
        // "Bài 1" and "Bài 10".."Bài 19"
        assert_eq!(board.listing().total_items(), 11);
    }

    #[test]
    fn no_match_is_empty_view() {
        let mut board = NewsBoard::new(sample(), 9);
        board.apply_filter(NewsFilter::default().with_search("không tồn tại"));
        assert_eq!(board.listing().view(), ListingView::Empty);
        assert_eq!(board.articles().len(), 4);
    }
}
