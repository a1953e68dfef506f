use serde::{Deserialize, Serialize};

/// Successful response body: `{ "data": ..., "meta": ... }`.
///
/// `data` is `None` when the backend sends `null` or omits it, which happens
/// for single types that were never filled in.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Document<T> {
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Meta {
    pub pagination: Option<Pagination>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}
