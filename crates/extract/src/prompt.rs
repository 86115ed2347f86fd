use gateway::Contract;

use crate::schema::{ActionItemCollection, TranscriptSummary};

/// Render the extraction instruction for one transcript. Pure function of its
/// input; the SCHEMA block comes from the output contract so the prompt and
/// the validator cannot drift apart.
pub fn build_extraction_prompt(transcript: &str) -> String {
    format!(
        r#"You are an assistant specialized in analyzing meeting transcripts to extract actionable tasks. Carefully read the provided transcript and identify every sentence or phrase that represents a specific action item, task, or commitment.

For each action item identified, extract:
1. action: the core task or action to be performed.
2. assignee: the individual or group responsible for executing it. Omit the field if not mentioned.
3. assigner: the individual who assigned the task or made the request. Omit the field if not clear.
4. timeline: any deadline, due date, or timeframe (e.g. "by Friday", "next week", "EOD"). Omit the field if none is mentioned.
5. context: the sentence or direct surrounding phrase where the action item was mentioned.

SCHEMA:
{schema}

RULES:
- Output ONLY the JSON object, no markdown, no explanations.
- Preserve the order in which the action items appear in the transcript.
- If no action items are found, return an empty "actionItems" list.

TRANSCRIPT:
{transcript}

JSON OUTPUT:"#,
        schema = ActionItemCollection::schema_lines(),
        transcript = transcript,
    )
}

/// Render the summarization instruction for one transcript.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        r#"Summarize the following meeting transcript in a concise manner, highlighting the key discussion points.

SCHEMA:
{schema}

RULES:
- Output ONLY the JSON object, no markdown, no explanations.
- Use only information present in the transcript.

TRANSCRIPT:
{transcript}

JSON OUTPUT:"#,
        schema = TranscriptSummary::schema_lines(),
        transcript = transcript,
    )
}
