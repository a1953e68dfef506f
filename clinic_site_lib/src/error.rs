//! Error types for the site layer.

use std::fmt;

/// Errors produced by the site layer. Content fetches themselves never fail
/// (they fall back to built-in copy); these cover input validation and
/// lookups that must reach the backend.
#[derive(Debug)]
pub enum SiteError {
    /// An error from the underlying content client.
    Api(clinic_cms_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<clinic_cms_api::Error> for SiteError {
    fn from(e: clinic_cms_api::Error) -> Self {
        Self::Api(e)
    }
}
