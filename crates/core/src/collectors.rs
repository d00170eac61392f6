//! Query strategies. Each collector is stateless and yields an ordered batch of records,
//! empty when the provider returns no items.

use crate::domain::{ApiKey, ChartQuery, RawVideoItem, SearchOrder, SearchQuery, VideoRecord};
use crate::error::SurfError;
use crate::normalize::normalize_response;
use crate::ports::{Result, VideoApi};
use tracing::debug;

/// Trending videos for a region, from the "most popular" chart
pub fn collect_trending(
    api: &dyn VideoApi,
    key: &ApiKey,
    region: &str,
    cap: u32,
) -> Result<Vec<VideoRecord>> {
    let query = ChartQuery {
        region_code: Some(region.to_string()),
        category_id: None,
        max_results: cap,
    };
    let response = api.most_popular(key, &query)?;
    debug!(region, items = response.items.len(), "trending chart fetched");
    normalize_response(&response)
}

/// Relevance-ordered video search, enriched with statistics for the hits.
/// Zero hits skip the enrichment call.
pub fn collect_by_keyword(
    api: &dyn VideoApi,
    key: &ApiKey,
    query: &str,
    cap: u32,
) -> Result<Vec<VideoRecord>> {
    let search = SearchQuery {
        q: query.to_string(),
        max_results: cap,
        order: SearchOrder::Relevance,
    };
    let hits = api.search(key, &search)?;

    let ids = hits
        .items
        .iter()
        .map(search_hit_id)
        .collect::<Result<Vec<_>>>()?;
    debug!(query, hits = ids.len(), "search finished");

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let enriched = api.videos_by_id(key, &ids)?;
    normalize_response(&enriched)
}

/// Most popular videos of one category
pub fn collect_by_category(
    api: &dyn VideoApi,
    key: &ApiKey,
    category_id: &str,
    cap: u32,
) -> Result<Vec<VideoRecord>> {
    let query = ChartQuery {
        region_code: None,
        category_id: Some(category_id.to_string()),
        max_results: cap,
    };
    let response = api.most_popular(key, &query)?;
    debug!(category_id, items = response.items.len(), "category chart fetched");
    normalize_response(&response)
}

fn search_hit_id(item: &RawVideoItem) -> Result<String> {
    item.id
        .as_ref()
        .and_then(|id| id.video_id())
        .map(str::to_string)
        .ok_or_else(|| SurfError::malformed("id.videoId"))
}
