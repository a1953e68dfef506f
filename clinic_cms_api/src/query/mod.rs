mod common;
pub use self::common::{PageBounds, Populate, Sort, SortDirection};

mod filter;
pub use self::filter::{Filter, FilterOp};

mod content;
pub use self::content::ContentQuery;
