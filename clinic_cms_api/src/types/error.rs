use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure body: `{ "data": null, "error": { ... } }`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: BackendError,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BackendError {
    pub status: u16,
    pub name: String,
    pub message: String,
    #[serde(default)]
    pub details: Value,
}
