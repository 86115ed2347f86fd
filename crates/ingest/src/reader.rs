use std::path::Path;
use tokio::fs;

use crate::IngestError;

pub struct TranscriptReader;

impl TranscriptReader {
    /// Read a transcript file into plain text. Only plain-text formats are
    /// handled here; `.docx` and `.pdf` belong to external text-extraction
    /// collaborators and are reported as unsupported.
    pub async fn read_file(path: &Path) -> Result<String, IngestError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "txt" | "md" => {
                let content =
                    fs::read_to_string(path)
                        .await
                        .map_err(|source| IngestError::Read {
                            path: path.display().to_string(),
                            source,
                        })?;
                Ok(content)
            }
            _ => Err(IngestError::UnsupportedFormat(extension)),
        }
    }
}
