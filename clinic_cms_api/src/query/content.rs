//! The structured query accepted by every collection and single-type endpoint.

use url::{form_urlencoded, Url};

use super::{Filter, PageBounds, Populate, Sort, SortDirection};

/// Filters, sort keys, pagination, field projection and relation population
/// for one request.
///
/// Serialization keeps the bracketed nesting readable (`filters[slug][$eq]=foo`):
/// keys are written as-is and only values are form-encoded. Parameters are
/// emitted in a fixed order: filters, sort, pagination, fields, populate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentQuery {
    pub filters: Vec<Filter>,
    pub sort: Vec<Sort>,
    pub pagination: PageBounds,
    pub fields: Vec<String>,
    pub populate: Option<Populate>,
}

impl ContentQuery {
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_eq(self, field: &str, value: &str) -> Self {
        self.with_filter(Filter::eq(field, value))
    }

    pub fn with_ne(self, field: &str, value: &str) -> Self {
        self.with_filter(Filter::ne(field, value))
    }

    pub fn with_sort(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort.push(Sort {
            field: field.to_string(),
            direction,
        });
        self
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = Some(page_size);
        self
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.fields.push(field.to_string());
        self
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields.extend(fields.iter().map(|f| f.to_string()));
        self
    }

    pub fn with_populate(mut self, populate: Populate) -> Self {
        self.populate = Some(populate);
        self
    }

    pub fn with_populate_depth(self, depth: u8) -> Self {
        self.with_populate(Populate::Depth(depth))
    }

    /// Adds a named relation, switching to [`Populate::Relations`] if another
    /// population mode was set.
    pub fn with_relation(mut self, relation: &str) -> Self {
        match &mut self.populate {
            Some(Populate::Relations(relations)) => relations.push(relation.to_string()),
            _ => self.populate = Some(Populate::Relations(vec![relation.to_string()])),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
            && self.sort.is_empty()
            && self.pagination.is_empty()
            && self.fields.is_empty()
            && self.populate.is_none()
    }

    /// Unencoded key/value pairs in emission order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for filter in &self.filters {
            pairs.push((filter.key(), filter.op.value().to_string()));
        }
        for (i, sort) in self.sort.iter().enumerate() {
            pairs.push((format!("sort[{}]", i), sort.to_string()));
        }
        if let Some(page) = self.pagination.page {
            pairs.push(("pagination[page]".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.pagination.page_size {
            pairs.push(("pagination[pageSize]".to_string(), page_size.to_string()));
        }
        for (i, field) in self.fields.iter().enumerate() {
            pairs.push((format!("fields[{}]", i), field.clone()));
        }
        match &self.populate {
            Some(Populate::All) => pairs.push(("populate".to_string(), "*".to_string())),
            Some(Populate::Relations(relations)) => {
                for (i, relation) in relations.iter().enumerate() {
                    pairs.push((format!("populate[{}]", i), relation.clone()));
                }
            }
            Some(Populate::Depth(depth)) => pairs.push(("pLevel".to_string(), depth.to_string())),
            None => {}
        }
        pairs
    }

    /// The query string without a leading `?`; empty when nothing is set.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    key,
                    form_urlencoded::byte_serialize(value.as_bytes()).collect::<String>()
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Replaces the query of `url` with this query.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let query = self.to_query_string();
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&query));
        }
        url
    }
}
