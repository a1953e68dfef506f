//! Sort, pagination and population parameters shared by every content query.

use std::str::FromStr;

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first). This is the backend default.
    #[default]
    Asc,
    /// Descending order (newest/largest first).
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// One sort key, serialized as `field:asc` or `field:desc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

/// Page-based pagination. `None` leaves the backend default in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageBounds {
    /// 1-indexed page number.
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageBounds {
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.page_size.is_none()
    }
}

/// Which relations the backend should embed in the response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Populate {
    /// Every first-level relation (`populate=*`).
    All,
    /// Named relations (`populate[0]=featured_image`).
    Relations(Vec<String>),
    /// Recursive population to the given depth through the deep-populate
    /// plugin (`pLevel=5`).
    Depth(u8),
}
