use serde::{Deserialize, Serialize};
use serde_json::Value;

use gateway::contract::{self, Contract};
use gateway::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Person,
    Action,
    Topic,
    Timeline,
    Context,
}

/// A graph vertex. Ids are unique within a map and stable: `action-<index>`
/// for action nodes, slugged entity names otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
}

/// A directed, optionally labeled relationship. `animated` is a presentation
/// hint for assignment edges and carries no further meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeMap {
    pub map_description: String,
    pub nodes: Vec<KnowledgeNode>,
    pub edges: Vec<KnowledgeEdge>,
}

impl Contract for KnowledgeMap {
    const NAME: &'static str = "knowledgeMap";

    fn schema_lines() -> &'static str {
        r#"{
  "mapDescription": "markdown summary of entities, relationships and themes",
  "nodes": [
    {"id": "unique entity id", "type": "person|action|topic|timeline|context", "label": "display text"}
  ],
  "edges": [
    {"id": "unique edge id", "source": "node id", "target": "node id", "label": "relationship, optional", "animated": true}
  ]
}"#
    }

    fn empty() -> Self {
        Self::default()
    }

    fn validate(raw: Value) -> Result<Self, SchemaError> {
        let mut map: Self = contract::decode(Self::NAME, raw)?;
        for edge in &mut map.edges {
            if edge.label.as_ref().is_some_and(|l| l.trim().is_empty()) {
                edge.label = None;
            }
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_accepts_full_map() {
        let raw = json!({
            "mapDescription": "**John** sends the report.",
            "nodes": [
                {"id": "person-john", "type": "person", "label": "John"},
                {"id": "action-0", "type": "action", "label": "Send the report"}
            ],
            "edges": [
                {"id": "e1", "source": "action-0", "target": "person-john", "label": "assigned to", "animated": true}
            ]
        });

        let map = KnowledgeMap::validate(raw).unwrap();
        assert_eq!(map.nodes.len(), 2);
        assert_eq!(map.nodes[0].kind, NodeKind::Person);
        assert_eq!(map.edges[0].animated, Some(true));
    }

    #[test]
    fn validate_rejects_unknown_node_type() {
        let raw = json!({
            "mapDescription": "",
            "nodes": [{"id": "x", "type": "robot", "label": "X"}],
            "edges": []
        });
        assert!(KnowledgeMap::validate(raw).is_err());
    }

    #[test]
    fn validate_rejects_missing_description() {
        let raw = json!({"nodes": [], "edges": []});
        assert!(KnowledgeMap::validate(raw).is_err());
    }

    #[test]
    fn validate_collapses_empty_edge_labels() {
        let raw = json!({
            "mapDescription": "d",
            "nodes": [
                {"id": "a", "type": "action", "label": "A"},
                {"id": "b", "type": "topic", "label": "B"}
            ],
            "edges": [{"id": "e1", "source": "a", "target": "b", "label": ""}]
        });

        let map = KnowledgeMap::validate(raw).unwrap();
        assert_eq!(map.edges[0].label, None);
    }
}
