//! The uniform result of every content fetch.

use crate::types::{Document, Meta};
use crate::Error;

/// Either the decoded document or the reason it could not be obtained.
///
/// Fetching never panics or returns early with an error: transport failures,
/// non-success statuses and malformed bodies all end up in `Failure`, so
/// callers only need to ask whether [`data`](Envelope::data) is present.
#[derive(Debug, Clone)]
pub enum Envelope<T> {
    Success(Document<T>),
    Failure(Error),
}

impl<T> Envelope<T> {
    /// The payload, if the fetch succeeded and the backend sent non-null `data`.
    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Success(doc) => doc.data.as_ref(),
            Envelope::Failure(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Envelope::Success(doc) => doc.data,
            Envelope::Failure(_) => None,
        }
    }

    pub fn meta(&self) -> Option<&Meta> {
        match self {
            Envelope::Success(doc) => doc.meta.as_ref(),
            Envelope::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(err) => Some(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    pub fn into_result(self) -> Result<Document<T>, Error> {
        match self {
            Envelope::Success(doc) => Ok(doc),
            Envelope::Failure(err) => Err(err),
        }
    }

    /// Transforms the payload while keeping `meta` and failures intact.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Envelope::Success(doc) => Envelope::Success(Document {
                data: doc.data.map(f),
                meta: doc.meta,
            }),
            Envelope::Failure(err) => Envelope::Failure(err),
        }
    }
}

impl<T> From<Result<Document<T>, Error>> for Envelope<T> {
    fn from(result: Result<Document<T>, Error>) -> Self {
        match result {
            Ok(doc) => Envelope::Success(doc),
            Err(err) => Envelope::Failure(err),
        }
    }
}
