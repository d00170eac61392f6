use reqwest::blocking::Client;
use serde::Deserialize;
use surf_core::domain::{ApiKey, ChartQuery, ListResponse, SearchQuery};
use surf_core::error::SurfError;
use surf_core::ports::{Result, VideoApi};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const VIDEO_PARTS: &str = "snippet,statistics";

/// Reasons in the provider's error envelope that mean the credential itself was refused
const AUTH_REASONS: [&str; 3] = ["keyInvalid", "keyExpired", "unauthorized"];

/// Blocking YouTube Data API v3 implementation of the VideoApi trait
pub struct YouTubeApiClient {
    client: Client,
    base_url: String,
}

impl YouTubeApiClient {
    /// Creates a client against the public endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against another endpoint root, e.g. a local mock
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("yt-surf/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SurfError::transport(None, format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn list(&self, key: &ApiKey, endpoint: &str, params: &[(&str, String)]) -> Result<ListResponse> {
        if key.is_empty() {
            return Err(SurfError::authentication("no API key provided (set YT_API_KEY)"));
        }

        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "calling provider");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", key.as_str())])
            .send()
            .map_err(|e| SurfError::transport(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &body));
        }

        response
            .json::<ListResponse>()
            .map_err(|e| SurfError::transport(Some(status.as_u16()), format!("undecodable response: {e}")))
    }
}

impl VideoApi for YouTubeApiClient {
    fn search(&self, key: &ApiKey, query: &SearchQuery) -> Result<ListResponse> {
        self.list(
            key,
            "search",
            &[
                ("part", "snippet".to_string()),
                ("q", query.q.clone()),
                ("maxResults", query.max_results.to_string()),
                ("order", query.order.as_param().to_string()),
                ("type", "video".to_string()),
            ],
        )
    }

    fn videos_by_id(&self, key: &ApiKey, ids: &[String]) -> Result<ListResponse> {
        self.list(
            key,
            "videos",
            &[("part", VIDEO_PARTS.to_string()), ("id", ids.join(","))],
        )
    }

    fn most_popular(&self, key: &ApiKey, query: &ChartQuery) -> Result<ListResponse> {
        let mut params = vec![
            ("part", VIDEO_PARTS.to_string()),
            ("chart", "mostPopular".to_string()),
        ];
        if let Some(region) = &query.region_code {
            params.push(("regionCode", region.clone()));
        }
        if let Some(category) = &query.category_id {
            params.push(("videoCategoryId", category.clone()));
        }
        params.push(("maxResults", query.max_results.to_string()));

        self.list(key, "videos", &params)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

/// Maps a non-success response to the error taxonomy
fn classify_failure(status: u16, body: &str) -> SurfError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();

    let message = envelope
        .as_ref()
        .and_then(|e| e.error.message.clone())
        .unwrap_or_else(|| body.trim().to_string());

    let credential_refused = envelope.as_ref().is_some_and(|e| {
        e.error
            .errors
            .iter()
            .filter_map(|d| d.reason.as_deref())
            .any(|reason| AUTH_REASONS.contains(&reason))
    });

    if status == 401 || credential_refused {
        SurfError::authentication(message)
    } else {
        SurfError::transport(Some(status), message)
    }
}
