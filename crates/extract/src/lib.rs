pub mod prompt;
pub mod schema;

pub use schema::{ActionItem, ActionItemCollection, TranscriptSummary};

use std::sync::Arc;

use gateway::{CompletionClient, Contract, GatewayError};

/// Transcript → action items stage. Also carries the sibling transcript →
/// summary flow, which shares the same gateway and degrade policy.
pub struct Extractor {
    client: Arc<dyn CompletionClient>,
}

impl Extractor {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Tagged-result variant for callers that need to distinguish "no items"
    /// from "call failed". An empty or all-whitespace transcript short-circuits
    /// to an empty collection without building a prompt or touching the
    /// gateway.
    pub async fn try_extract_action_items(
        &self,
        transcript: &str,
    ) -> Result<ActionItemCollection, GatewayError> {
        if transcript.trim().is_empty() {
            return Ok(ActionItemCollection::empty());
        }

        let prompt = prompt::build_extraction_prompt(transcript);
        gateway::complete::<ActionItemCollection>(self.client.as_ref(), &prompt).await
    }

    /// Total operation: never raises. Gateway failure is logged and degrades
    /// to an empty collection.
    pub async fn extract_action_items(&self, transcript: &str) -> ActionItemCollection {
        match self.try_extract_action_items(transcript).await {
            Ok(collection) => collection,
            Err(error) => {
                tracing::error!(%error, "action item extraction failed");
                ActionItemCollection::empty()
            }
        }
    }

    pub async fn try_summarize(&self, transcript: &str) -> Result<TranscriptSummary, GatewayError> {
        if transcript.trim().is_empty() {
            return Ok(TranscriptSummary::empty());
        }

        let prompt = prompt::build_summary_prompt(transcript);
        gateway::complete::<TranscriptSummary>(self.client.as_ref(), &prompt).await
    }

    /// Total operation: failure degrades to a summary carrying the error text.
    pub async fn summarize(&self, transcript: &str) -> TranscriptSummary {
        match self.try_summarize(transcript).await {
            Ok(summary) => summary,
            Err(error) => {
                tracing::error!(%error, "transcript summarization failed");
                TranscriptSummary {
                    summary: format!("Error summarizing transcript: {error}"),
                }
            }
        }
    }
}
