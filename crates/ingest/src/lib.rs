pub mod reader;

pub use reader::TranscriptReader;

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported transcript format: .{0}")]
    UnsupportedFormat(String),
    #[error("failed to read transcript {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read one transcript file into the plain-text form the pipeline consumes.
pub async fn read_transcript(path: &Path) -> Result<String, IngestError> {
    TranscriptReader::read_file(path).await
}
