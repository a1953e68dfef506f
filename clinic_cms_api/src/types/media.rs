use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// An uploaded file as embedded in content payloads. `url` is usually relative
/// to the backend origin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub url: String,
    pub alternative_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub mime: Option<String>,
    /// Empty for files the backend does not resize (SVG, video), which it
    /// reports as `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub formats: HashMap<String, MediaFormat>,
}

/// A resized rendition (`thumbnail`, `small`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MediaFormat {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, MediaFormat>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
