use crate::domain::{ListResponse, RawCount, RawVideoItem, VideoRecord};
use crate::error::SurfError;
use crate::ports::Result;
use crate::utils::truncate_description;

/// Maps one raw item, in either the search-result or the video-resource shape, to a record.
/// Missing statistics count as 0; missing required fields fail the whole item.
pub fn normalize_item(item: &RawVideoItem) -> Result<VideoRecord> {
    let video_id = item
        .id
        .as_ref()
        .ok_or_else(|| SurfError::malformed("id"))?
        .video_id()
        .ok_or_else(|| SurfError::malformed("id.videoId"))?
        .to_string();

    let snippet = item
        .snippet
        .as_ref()
        .ok_or_else(|| SurfError::malformed("snippet"))?;
    let title = required(&snippet.title, "snippet.title")?;
    let channel_title = required(&snippet.channel_title, "snippet.channelTitle")?;
    let published_at = required(&snippet.published_at, "snippet.publishedAt")?;

    let (view_count, like_count) = match &item.statistics {
        Some(stats) => (
            count(stats.view_count.as_ref(), "statistics.viewCount")?,
            count(stats.like_count.as_ref(), "statistics.likeCount")?,
        ),
        None => (0, 0),
    };

    Ok(VideoRecord {
        video_id,
        title,
        channel_title,
        published_at,
        view_count,
        like_count,
        description: truncate_description(snippet.description.as_deref().unwrap_or_default()),
    })
}

/// Normalizes every item of a response, in response order
pub fn normalize_response(response: &ListResponse) -> Result<Vec<VideoRecord>> {
    response.items.iter().map(normalize_item).collect()
}

fn required(value: &Option<String>, field: &str) -> Result<String> {
    value.clone().ok_or_else(|| SurfError::malformed(field))
}

fn count(value: Option<&RawCount>, field: &str) -> Result<u64> {
    match value {
        None => Ok(0),
        Some(RawCount::Number(n)) => Ok(*n),
        Some(RawCount::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| SurfError::malformed(format!("{field} ({text:?} is not a count)"))),
        Some(RawCount::Unrecognized(_)) => Err(SurfError::malformed(field)),
    }
}
