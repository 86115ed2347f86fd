use extract::ActionItemCollection;
use gateway::Contract;

use crate::schema::KnowledgeMap;

/// Render the mapping instruction for an ordered action-item collection.
/// Each item is labeled with its positional id (`action-<index>`, 0-based) so
/// the model can reuse it as the id of the corresponding action node.
pub fn build_mapping_prompt(items: &ActionItemCollection) -> String {
    let mut block = String::new();
    for (index, item) in items.action_items.iter().enumerate() {
        block.push_str(&format!(
            "- Action: {} (Action ID: action-{})\n",
            item.action, index
        ));
        if let Some(assignee) = &item.assignee {
            block.push_str(&format!("  Assignee: {assignee}\n"));
        }
        if let Some(assigner) = &item.assigner {
            block.push_str(&format!("  Assigner: {assigner}\n"));
        }
        if let Some(timeline) = &item.timeline {
            block.push_str(&format!("  Timeline: {timeline}\n"));
        }
        block.push_str(&format!("  Context: {}\n", item.context));
    }

    format!(
        r#"Analyze the following list of action items extracted from a meeting transcript. Create a knowledge map that synthesizes this information, providing both a textual summary and structured data for visualization.

ACTION ITEMS:
{block}
INSTRUCTIONS:
1. Identify the key entities: people (assignees and assigners), actions, important topics derived from the context, and timelines. Create one unique id per distinct entity. Use the provided action ids (action-0, action-1, ...) for action nodes. Normalize names into ids: lowercase, spaces replaced with underscores (e.g. 'person-jane_smith', 'topic-budget', 'timeline-friday').
2. Determine the relationships between the entities: who assigned what to whom, which deadline applies to which action, which context or topic an action belongs to.
3. Write "mapDescription": a clear, concise summary of the analysis. Use markdown for formatting (lists, bold). Highlight key relationships, assignments, deadlines and themes.
4. Fill "nodes" and "edges". Assignment edges run assigner -> action and action -> assignee and carry "animated": true. Every edge's "source" and "target" must be ids present in the node list.

SCHEMA:
{schema}

RULES:
- Output ONLY the JSON object, no markdown around it, no explanations.
- Base the map only on the provided action items.
- If no entities or relationships can be derived, return empty "nodes" and "edges" and an explanatory "mapDescription".

JSON OUTPUT:"#,
        block = block,
        schema = KnowledgeMap::schema_lines(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract::ActionItem;

    fn two_items() -> ActionItemCollection {
        ActionItemCollection {
            action_items: vec![
                ActionItem {
                    action: "update the roadmap".to_string(),
                    assignee: Some("Alice".to_string()),
                    assigner: None,
                    timeline: Some("Tuesday".to_string()),
                    context: "Alice will update the roadmap by Tuesday.".to_string(),
                },
                ActionItem {
                    action: "review the budget".to_string(),
                    assignee: None,
                    assigner: Some("Bob".to_string()),
                    timeline: None,
                    context: "Bob asked someone to review the budget.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn prompt_labels_items_with_positional_ids() {
        let prompt = build_mapping_prompt(&two_items());

        assert!(prompt.contains("(Action ID: action-0)"));
        assert!(prompt.contains("(Action ID: action-1)"));
        assert!(prompt.contains("Assignee: Alice"));
        assert!(prompt.contains("Assigner: Bob"));
    }

    #[test]
    fn prompt_omits_absent_optional_lines() {
        let prompt = build_mapping_prompt(&two_items());

        // item 1 has no timeline, item 0 has no assigner
        assert_eq!(prompt.matches("  Timeline:").count(), 1);
        assert_eq!(prompt.matches("  Assigner:").count(), 1);
    }

    #[test]
    fn prompt_is_deterministic() {
        let items = two_items();
        assert_eq!(build_mapping_prompt(&items), build_mapping_prompt(&items));
    }
}
