//! Input validation for user-supplied values: search terms, slugs, page
//! numbers and contact-form fields.

use crate::error::SiteError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_SLUG_LENGTH: usize = 200;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, SiteError> {
    if input.len() > max_len {
        return Err(SiteError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(SiteError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, SiteError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate an article slug. Surrounding whitespace and slashes are dropped;
/// whether an article has that slug is the backend's call.
pub fn validate_slug(input: &str) -> Result<String, SiteError> {
    let slug = input.trim().trim_matches('/');
    if slug.is_empty() || slug.chars().count() > MAX_SLUG_LENGTH {
        return Err(SiteError::InvalidInput(format!(
            "slug must be 1-{} characters",
            MAX_SLUG_LENGTH
        )));
    }
    Ok(slug.to_string())
}

/// A required contact-form field: must not be blank, sent trimmed.
pub fn require_field(field: &str, input: &str) -> Result<String, SiteError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(SiteError::InvalidInput(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: usize) -> Result<usize, SiteError> {
    if page < 1 {
        return Err(SiteError::InvalidInput("page must be >= 1".to_string()));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_page_size(page_size: usize) -> Result<usize, SiteError> {
    if !(1..=100).contains(&page_size) {
        return Err(SiteError::InvalidInput(
            "page_size must be between 1 and 100".to_string(),
        ));
    }
    Ok(page_size)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
