use crate::domain::{ApiKey, ChartQuery, ListResponse, RawVideoItem, SearchQuery};
use crate::error::SurfError;
use crate::ports::{Pause, Result, VideoApi};
use serde_json::json;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// A call observed by [`FakeVideoApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Search(SearchQuery),
    VideosById(Vec<String>),
    MostPopular(ChartQuery),
}

/// In-memory `VideoApi` that records calls and replays canned responses
#[derive(Default)]
pub struct FakeVideoApi {
    pub calls: RefCell<Vec<ApiCall>>,
    pub search_results: HashMap<String, ListResponse>,
    pub chart_results: RefCell<VecDeque<ListResponse>>,
    pub fail_with_auth: bool,
}

impl FakeVideoApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, q: &str, response: ListResponse) -> Self {
        self.search_results.insert(q.to_string(), response);
        self
    }

    pub fn with_chart(self, response: ListResponse) -> Self {
        self.chart_results.borrow_mut().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn check_key(&self, key: &ApiKey) -> Result<()> {
        if self.fail_with_auth || key.is_empty() {
            return Err(SurfError::authentication("API key not valid"));
        }
        Ok(())
    }
}

impl VideoApi for FakeVideoApi {
    fn search(&self, key: &ApiKey, query: &SearchQuery) -> Result<ListResponse> {
        self.calls.borrow_mut().push(ApiCall::Search(query.clone()));
        self.check_key(key)?;
        Ok(self.search_results.get(&query.q).cloned().unwrap_or_default())
    }

    fn videos_by_id(&self, key: &ApiKey, ids: &[String]) -> Result<ListResponse> {
        self.calls.borrow_mut().push(ApiCall::VideosById(ids.to_vec()));
        self.check_key(key)?;
        // Echo the ids back as full video resources with statistics
        let items = ids
            .iter()
            .map(|id| video_resource(id, "Enriched", 100, 10))
            .collect();
        Ok(ListResponse { items })
    }

    fn most_popular(&self, key: &ApiKey, query: &ChartQuery) -> Result<ListResponse> {
        self.calls.borrow_mut().push(ApiCall::MostPopular(query.clone()));
        self.check_key(key)?;
        Ok(self.chart_results.borrow_mut().pop_front().unwrap_or_default())
    }
}

/// Records requested pauses instead of sleeping
#[derive(Default)]
pub struct RecordingPause {
    pub pauses: RefCell<Vec<Duration>>,
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}

pub fn test_key() -> ApiKey {
    ApiKey::new("test-key")
}

/// A `videos.list` item with a flat id and statistics
pub fn video_resource(id: &str, title: &str, views: u64, likes: u64) -> RawVideoItem {
    serde_json::from_value(json!({
        "id": id,
        "snippet": {
            "title": title,
            "channelTitle": "Channel",
            "publishedAt": "2024-05-01T12:00:00Z",
            "description": format!("About {title}")
        },
        "statistics": {"viewCount": views.to_string(), "likeCount": likes.to_string()}
    }))
    .unwrap()
}

/// A `search.list` item with a nested id and no statistics
pub fn search_result(id: &str, title: &str) -> RawVideoItem {
    serde_json::from_value(json!({
        "id": {"kind": "youtube#video", "videoId": id},
        "snippet": {
            "title": title,
            "channelTitle": "Channel",
            "publishedAt": "2024-05-01T12:00:00Z",
            "description": "found by search"
        }
    }))
    .unwrap()
}

pub fn response(items: Vec<RawVideoItem>) -> ListResponse {
    ListResponse { items }
}
