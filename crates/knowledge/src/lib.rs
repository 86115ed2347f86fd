pub mod normalizer;
pub mod prompt;
pub mod schema;

pub use normalizer::EntitySlugger;
pub use schema::{KnowledgeEdge, KnowledgeMap, KnowledgeNode, NodeKind};

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use extract::ActionItemCollection;
use gateway::{CompletionClient, GatewayError};

pub const EMPTY_INPUT_DESCRIPTION: &str =
    "No action items provided to generate a knowledge map.";

/// Action items → knowledge map stage.
pub struct MapBuilder {
    client: Arc<dyn CompletionClient>,
    slugger: EntitySlugger,
}

impl MapBuilder {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            slugger: EntitySlugger::new(),
        }
    }

    /// Tagged-result variant. An empty collection short-circuits to an
    /// explanatory empty map without building a prompt or touching the
    /// gateway. A validated response still goes through two deterministic
    /// repair passes: person-id normalization and dangling-edge removal.
    pub async fn try_generate(
        &self,
        items: &ActionItemCollection,
    ) -> Result<KnowledgeMap, GatewayError> {
        if items.action_items.is_empty() {
            return Ok(KnowledgeMap {
                map_description: EMPTY_INPUT_DESCRIPTION.to_string(),
                nodes: Vec::new(),
                edges: Vec::new(),
            });
        }

        let prompt = prompt::build_mapping_prompt(items);
        let mut map = gateway::complete::<KnowledgeMap>(self.client.as_ref(), &prompt).await?;

        self.normalize_person_ids(&mut map);
        drop_dangling_edges(&mut map);

        Ok(map)
    }

    /// Total operation: never raises. Gateway failure degrades to a map whose
    /// description carries the error text and whose node/edge lists are empty.
    pub async fn generate(&self, items: &ActionItemCollection) -> KnowledgeMap {
        match self.try_generate(items).await {
            Ok(map) => map,
            Err(error) => {
                tracing::error!(%error, "knowledge map generation failed");
                KnowledgeMap {
                    map_description: format!("Error generating knowledge map: {error}"),
                    nodes: Vec::new(),
                    edges: Vec::new(),
                }
            }
        }
    }

    /// Re-derive person node ids from their labels instead of trusting the
    /// model's normalization, rewrite edge endpoints through the same mapping
    /// and merge nodes that collapse onto one id (first label wins).
    fn normalize_person_ids(&self, map: &mut KnowledgeMap) {
        let mut canonical: HashMap<String, String> = HashMap::new();

        for node in &mut map.nodes {
            if node.kind != NodeKind::Person {
                continue;
            }
            let slug = self.slugger.slug(&node.label);
            if slug.is_empty() {
                continue;
            }
            let id = format!("person-{slug}");
            canonical.insert(node.id.clone(), id.clone());
            node.id = id;
        }

        let mut seen = HashSet::new();
        map.nodes.retain(|node| seen.insert(node.id.clone()));

        for edge in &mut map.edges {
            if let Some(id) = canonical.get(&edge.source) {
                edge.source = id.clone();
            }
            if let Some(id) = canonical.get(&edge.target) {
                edge.target = id.clone();
            }
        }
    }
}

/// The edge set must form a graph over the node set only. Edges referencing
/// unknown node ids are repaired away, not surfaced as errors.
fn drop_dangling_edges(map: &mut KnowledgeMap) {
    let ids: HashSet<&str> = map.nodes.iter().map(|n| n.id.as_str()).collect();

    let before = map.edges.len();
    map.edges
        .retain(|edge| ids.contains(edge.source.as_str()) && ids.contains(edge.target.as_str()));

    let dropped = before - map.edges.len();
    if dropped > 0 {
        tracing::warn!(dropped, "dropped edges referencing missing nodes");
    }
}
