use crate::domain::{ApiKey, ChartQuery, ListResponse, SearchQuery, VideoRecord};
use crate::error::SurfError;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, SurfError>;

/// Capability offered by the video platform's public API.
/// Calls are blocking; the credential travels with every call.
pub trait VideoApi {
    /// Keyword search restricted to video results (snippets only, no statistics)
    fn search(&self, key: &ApiKey, query: &SearchQuery) -> Result<ListResponse>;

    /// Full video resources (snippet and statistics) for the given identifiers
    fn videos_by_id(&self, key: &ApiKey, ids: &[String]) -> Result<ListResponse>;

    /// The "most popular" chart
    fn most_popular(&self, key: &ApiKey, query: &ChartQuery) -> Result<ListResponse>;
}

/// Trait for persisting the final table
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait RecordWriter {
    fn write(&self, records: &[VideoRecord]) -> Result<()>;
}

/// Blocking wait between network-bound calls
pub trait Pause {
    fn pause(&self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
