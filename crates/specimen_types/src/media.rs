//! Image, video and link field records, plus responsive media queries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::spec::SpecMeta;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageData {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Media query to image url, e.g. `(max-width: 799px)` to a smaller asset.
    #[serde(default)]
    pub media: BTreeMap<String, String>,
}

impl ImageData {
    /// Url to use for `media`, falling back to the main url.
    pub fn url_for(&self, media: &str) -> &str {
        self.media.get(media).map(String::as_str).unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
    #[serde(default)]
    pub controls: bool,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default)]
    pub muted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoData {
    pub url: String,
    /// Mime type to source url, e.g. `video/mp4`.
    #[serde(default)]
    pub source: BTreeMap<String, String>,
    #[serde(default)]
    pub controls: bool,
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default)]
    pub muted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkSpec {
    #[serde(flatten)]
    pub meta: SpecMeta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkData {
    pub text: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub new_window: bool,
}

/// Comparison applied to the default media query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MediaAction {
    #[serde(rename = "<")]
    Lower,
    #[default]
    #[serde(rename = "<=")]
    LowerOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "=")]
    Equal,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaQuery {
    #[serde(default)]
    pub min_width: u32,
    #[serde(default)]
    pub max_width: u32,
}

/// Named media queries used by responsive fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub default_action: MediaAction,
    pub default_media: String,
    #[serde(default)]
    pub queries: BTreeMap<String, MediaQuery>,
}

impl Media {
    /// Name of the first query whose width range contains `width`.
    ///
    /// A `max_width` of zero means unbounded.
    pub fn media_for_width(&self, width: u32) -> Option<&str> {
        self.queries
            .iter()
            .find(|(_, query)| {
                width >= query.min_width && (query.max_width == 0 || width <= query.max_width)
            })
            .map(|(name, _)| name.as_str())
    }
}
