use crate::collectors::{collect_by_category, collect_by_keyword, collect_trending};
use crate::domain::{ApiKey, VideoRecord};
use crate::plan::{CollectionKind, CollectionPlan, CollectionStep};
use crate::ports::{Pause, RecordWriter, Result, VideoApi};
use crate::utils::dedup_by_video_id;
use tracing::{debug, info};

/// Application service for surfing the platform and exporting a deduplicated table
pub struct SurfServiceImpl {
    video_api: Box<dyn VideoApi>,
    record_writer: Box<dyn RecordWriter>,
    pause: Box<dyn Pause>,
    plan: CollectionPlan,
}

impl SurfServiceImpl {
    /// Creates a new SurfServiceImpl with the given dependencies
    pub fn new(
        video_api: Box<dyn VideoApi>,
        record_writer: Box<dyn RecordWriter>,
        pause: Box<dyn Pause>,
        plan: CollectionPlan,
    ) -> Self {
        Self {
            video_api,
            record_writer,
            pause,
            plan,
        }
    }

    pub fn plan(&self) -> &CollectionPlan {
        &self.plan
    }

    /// Runs every planned step in order, pausing where the plan says so, then
    /// concatenates the batches and keeps the first record seen for each video id.
    /// The first error aborts the run.
    pub fn collect(&self, key: &ApiKey) -> Result<Vec<VideoRecord>> {
        let mut combined = Vec::new();

        for step in &self.plan.steps {
            info!("{}", step.progress_message());
            let batch = self.run_step(key, step)?;
            debug!(records = batch.len(), "batch collected");
            combined.extend(batch);

            if let Some(delay) = step.pause_after {
                self.pause.pause(delay);
            }
        }

        let total = combined.len();
        let unique = dedup_by_video_id(combined);
        debug!(total, unique = unique.len(), "deduplicated");
        Ok(unique)
    }

    /// Hands the final table to the configured writer
    pub fn export(&self, records: &[VideoRecord]) -> Result<()> {
        self.record_writer.write(records)
    }

    /// Executes the whole pipeline: collect, then export
    pub fn execute_surf(&self, key: &ApiKey) -> Result<Vec<VideoRecord>> {
        let records = self.collect(key)?;
        self.export(&records)?;
        Ok(records)
    }

    fn run_step(&self, key: &ApiKey, step: &CollectionStep) -> Result<Vec<VideoRecord>> {
        let api = self.video_api.as_ref();
        match &step.kind {
            CollectionKind::Trending { region } => collect_trending(api, key, region, step.cap),
            CollectionKind::Keyword { query } => collect_by_keyword(api, key, query, step.cap),
            CollectionKind::Category { id, .. } => collect_by_category(api, key, id, step.cap),
        }
    }
}
