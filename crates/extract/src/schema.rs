use serde::{Deserialize, Serialize};
use serde_json::Value;

use gateway::contract::{self, Contract};
use gateway::SchemaError;

/// One commitment identified in a transcript. `assignee`, `assigner` and
/// `timeline` are present only when the source text supports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    pub context: String,
}

impl ActionItem {
    /// Completion services routinely emit `""` where the prompt says "leave
    /// the field out"; collapse those to absent. Returns false when a required
    /// field is empty and the item should be discarded.
    fn normalize(&mut self) -> bool {
        collapse_empty(&mut self.assignee);
        collapse_empty(&mut self.assigner);
        collapse_empty(&mut self.timeline);

        !self.action.trim().is_empty() && !self.context.trim().is_empty()
    }
}

fn collapse_empty(field: &mut Option<String>) {
    if field.as_ref().is_some_and(|s| s.trim().is_empty()) {
        *field = None;
    }
}

/// Ordered action items, insertion order = order of appearance in the
/// transcript. Empty is a valid terminal state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItemCollection {
    pub action_items: Vec<ActionItem>,
}

impl Contract for ActionItemCollection {
    const NAME: &'static str = "actionItems";

    fn schema_lines() -> &'static str {
        r#"{
  "actionItems": [
    {
      "action": "the core task to be performed",
      "assignee": "responsible person, omit if unknown",
      "assigner": "requesting person, omit if unknown",
      "timeline": "deadline or timeframe, omit if unknown",
      "context": "the sentence where the task was mentioned"
    }
  ]
}"#
    }

    fn empty() -> Self {
        Self::default()
    }

    fn validate(raw: Value) -> Result<Self, SchemaError> {
        let mut collection: Self = contract::decode(Self::NAME, raw)?;

        let before = collection.action_items.len();
        collection.action_items.retain_mut(ActionItem::normalize);
        let dropped = before - collection.action_items.len();
        if dropped > 0 {
            tracing::warn!(dropped, "discarded action items with empty required fields");
        }

        Ok(collection)
    }
}

/// Key discussion points of a transcript, in prose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSummary {
    pub summary: String,
}

impl Contract for TranscriptSummary {
    const NAME: &'static str = "summary";

    fn schema_lines() -> &'static str {
        r#"{
  "summary": "a concise summary of the meeting transcript"
}"#
    }

    fn empty() -> Self {
        Self::default()
    }

    fn validate(raw: Value) -> Result<Self, SchemaError> {
        contract::decode(Self::NAME, raw)
    }
}
