use csv::WriterBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use surf_core::domain::VideoRecord;
use surf_core::error::SurfError;
use surf_core::ports::{RecordWriter, Result};
use tracing::debug;

pub const DEFAULT_OUTPUT_FILE: &str = "surfed_youtube_data.csv";

/// Comma-separated writer adapter implementation
pub struct CsvWriterAdapter {
    output_file: PathBuf,
}

impl CsvWriterAdapter {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

impl RecordWriter for CsvWriterAdapter {
    /// Writes the header row and one row per record, replacing any existing file.
    /// The header is written even when there are no records.
    fn write(&self, records: &[VideoRecord]) -> Result<()> {
        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.output_file)
            .map_err(export_error)?;

        writer
            .write_record(VideoRecord::HEADERS)
            .map_err(export_error)?;
        for record in records {
            writer.serialize(record).map_err(export_error)?;
        }
        writer.flush()?;

        debug!(path = %self.output_file.display(), rows = records.len(), "export written");
        Ok(())
    }
}

fn export_error(err: csv::Error) -> SurfError {
    SurfError::export(err.to_string())
}
