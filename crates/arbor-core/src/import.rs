//! External document import.
//!
//! Uploaded documents use a narrower schema than the persisted one: each
//! node may carry a denormalized `connections` list of child ids, and that
//! list is the only source of edges. Any top-level `edges` array is
//! discarded during normalization, so a document produced by the export
//! path does not re-import its edges. Known interoperability gap, kept to
//! match the established document corpus; see DESIGN.md.

use crate::error::ImportError;
use crate::id::NodeId;
use crate::model::{EdgeRecord, GraphDocument, Node, Shape};
use serde::Deserialize;
use smallvec::SmallVec;

/// A node as it appears in an uploaded document.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportNode {
    pub id: NodeId,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub shape: Option<Shape>,
    /// Child node ids, expanded into edges during normalization.
    #[serde(default)]
    pub connections: SmallVec<[NodeId; 4]>,
}

impl From<ImportNode> for Node {
    fn from(node: ImportNode) -> Self {
        Node {
            id: node.id,
            label: node.label,
            comment: node.comment,
            shape: node.shape,
        }
    }
}

/// An uploaded document before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportDocument {
    pub nodes: Option<Vec<ImportNode>>,
    /// Accepted in any shape for compatibility, then discarded; see the
    /// module docs.
    #[serde(default)]
    pub edges: Vec<serde_json::Value>,
}

/// Parse raw uploaded text. Anything that is not valid JSON fails as
/// [`ImportError::Malformed`].
pub fn parse(raw: &str) -> Result<ImportDocument, ImportError> {
    Ok(serde_json::from_str(raw)?)
}

/// Minimal structural validation: `nodes` must be present. `edges` are not
/// required; a connections-only document is valid.
pub fn validate(doc: &ImportDocument) -> Result<(), ImportError> {
    if doc.nodes.is_none() {
        return Err(ImportError::MissingField("nodes"));
    }
    Ok(())
}

/// Expand per-node `connections` into the canonical `{nodes, edges}`
/// document. Top-level `edges` are discarded, with a warning carrying the
/// count.
pub fn normalize(doc: ImportDocument) -> Result<GraphDocument, ImportError> {
    validate(&doc)?;
    if !doc.edges.is_empty() {
        log::warn!(
            "import: discarding {} top-level edges; edges are rebuilt from node connections",
            doc.edges.len()
        );
    }

    let nodes = doc.nodes.unwrap_or_default();
    let mut edges = Vec::new();
    for node in &nodes {
        for &child in &node.connections {
            edges.push(EdgeRecord {
                from: node.id,
                to: child,
                id: None,
            });
        }
    }

    Ok(GraphDocument {
        nodes: nodes.into_iter().map(Node::from).collect(),
        edges,
    })
}

/// Full pipeline: parse, validate, normalize.
pub fn import_document(raw: &str) -> Result<GraphDocument, ImportError> {
    normalize(parse(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn connections_expand_into_edges() {
        let doc = import_document(
            r#"{"nodes":[{"id":1,"label":"root","connections":[2]},{"id":2,"label":"child"}]}"#,
        )
        .unwrap();

        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.edges.len(), 1);
        assert_eq!(doc.edges[0].from, NodeId(1));
        assert_eq!(doc.edges[0].to, NodeId(2));
        assert_eq!(doc.edges[0].id, None);
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            import_document("{nodes: oops"),
            Err(ImportError::Malformed(_))
        ));
    }

    #[test]
    fn missing_nodes_field_is_reported() {
        assert!(matches!(
            import_document(r#"{"edges":[]}"#),
            Err(ImportError::MissingField("nodes"))
        ));
    }

    #[test]
    fn top_level_edges_are_discarded() {
        let doc = import_document(
            r#"{"nodes":[{"id":1,"label":"a"},{"id":2,"label":"b"}],"edges":[{"from":1,"to":2}]}"#,
        )
        .unwrap();

        // The explicit edge list is ignored; only connections count.
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn nodes_without_connections_import_cleanly() {
        let doc = import_document(r#"{"nodes":[{"id":4,"label":"lonely"}]}"#).unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn comment_and_shape_survive_import() {
        let doc = import_document(
            r#"{"nodes":[{"id":1,"label":"styled","comment":"note","shape":"triangleDown"}]}"#,
        )
        .unwrap();

        let node = &doc.nodes[0];
        assert_eq!(node.comment.as_deref(), Some("note"));
        assert_eq!(node.shape, Some(Shape::TriangleDown));
    }
}
