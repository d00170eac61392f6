use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat representation of one video, as written to the export file.
/// Field order is the column order of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub published_at: String, // ISO-8601, kept as returned by the provider
    pub view_count: u64,
    pub like_count: u64,
    pub description: String,
}

impl VideoRecord {
    /// Column names in export order
    pub const HEADERS: [&'static str; 7] = [
        "videoId",
        "title",
        "channelTitle",
        "publishedAt",
        "viewCount",
        "likeCount",
        "description",
    ];
}

/// Provider credential, threaded explicitly into every call.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Identifier as it appears in either response shape.
/// Search results nest it (`{"kind": "...", "videoId": "..."}`), video resources carry it flat.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawVideoId {
    Structured {
        #[serde(rename = "videoId")]
        video_id: String,
    },
    Flat(String),
    Unrecognized(serde_json::Value),
}

impl RawVideoId {
    pub fn video_id(&self) -> Option<&str> {
        match self {
            RawVideoId::Structured { video_id } => Some(video_id),
            RawVideoId::Flat(id) => Some(id),
            RawVideoId::Unrecognized(_) => None,
        }
    }
}

/// Engagement counter. The provider sends decimal strings, but plain numbers are accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Number(u64),
    Text(String),
    Unrecognized(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnippet {
    pub title: Option<String>,
    pub channel_title: Option<String>,
    pub published_at: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatistics {
    pub view_count: Option<RawCount>,
    pub like_count: Option<RawCount>,
}

/// One item of a `search.list` or `videos.list` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawVideoItem {
    pub id: Option<RawVideoId>,
    pub snippet: Option<RawSnippet>,
    pub statistics: Option<RawStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub items: Vec<RawVideoItem>,
}

/// Ordering accepted by the search endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchOrder {
    #[default]
    Relevance,
    Date,
    Rating,
    ViewCount,
}

impl SearchOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SearchOrder::Relevance => "relevance",
            SearchOrder::Date => "date",
            SearchOrder::Rating => "rating",
            SearchOrder::ViewCount => "viewCount",
        }
    }
}

/// Keyword search restricted to video results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub max_results: u32,
    pub order: SearchOrder,
}

/// "Most popular" chart listing, optionally narrowed by region and category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartQuery {
    pub region_code: Option<String>,
    pub category_id: Option<String>,
    pub max_results: u32,
}
