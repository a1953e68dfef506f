mod meta;
pub use self::meta::{Document, Meta, Pagination};

mod media;
pub use self::media::{Media, MediaFormat};

mod error;
pub use self::error::{BackendError, ErrorBody};
