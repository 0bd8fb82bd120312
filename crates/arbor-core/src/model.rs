//! Graph records and the persisted document shape.
//!
//! A diagram is a set of labeled nodes joined by directed parent→child
//! edges. Nodes optionally carry free-text commentary and a rendering shape
//! hint from the external renderer's vocabulary. The serialized form is the
//! fixed `{nodes, edges}` document used by the durable store, the JSON
//! export, and atomic whole-graph replacement.

use crate::id::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

// ─── Shapes ──────────────────────────────────────────────────────────────

/// Rendering shape hint, in the hierarchical renderer's vocabulary.
/// Serialized in camelCase so documents carry the renderer's names verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    Ellipse,
    Circle,
    Database,
    Box,
    Text,
    Diamond,
    Dot,
    Star,
    Triangle,
    TriangleDown,
    Hexagon,
    Square,
}

impl Shape {
    /// Every shape, in vocabulary order. Used by hosts to populate pickers.
    pub const ALL: [Shape; 12] = [
        Shape::Ellipse,
        Shape::Circle,
        Shape::Database,
        Shape::Box,
        Shape::Text,
        Shape::Diamond,
        Shape::Dot,
        Shape::Star,
        Shape::Triangle,
        Shape::TriangleDown,
        Shape::Hexagon,
        Shape::Square,
    ];

    /// Resolve a vocabulary name (e.g. a shape-picker value) to a shape.
    /// Returns `None` for names outside the vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ellipse" => Some(Shape::Ellipse),
            "circle" => Some(Shape::Circle),
            "database" => Some(Shape::Database),
            "box" => Some(Shape::Box),
            "text" => Some(Shape::Text),
            "diamond" => Some(Shape::Diamond),
            "dot" => Some(Shape::Dot),
            "star" => Some(Shape::Star),
            "triangle" => Some(Shape::Triangle),
            "triangleDown" => Some(Shape::TriangleDown),
            "hexagon" => Some(Shape::Hexagon),
            "square" => Some(Shape::Square),
            _ => None,
        }
    }

    /// The vocabulary name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Ellipse => "ellipse",
            Shape::Circle => "circle",
            Shape::Database => "database",
            Shape::Box => "box",
            Shape::Text => "text",
            Shape::Diamond => "diamond",
            Shape::Dot => "dot",
            Shape::Star => "star",
            Shape::Triangle => "triangle",
            Shape::TriangleDown => "triangleDown",
            Shape::Hexagon => "hexagon",
            Shape::Square => "square",
        }
    }
}

// ─── Nodes & edges ───────────────────────────────────────────────────────

/// A labeled graph vertex with optional commentary and a shape hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            comment: None,
            shape: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A directed parent→child relation between two nodes.
///
/// Duplicate `(from, to)` pairs are permitted: the store imposes no
/// uniqueness on endpoint pairs, only on edge ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
}

/// Persisted form of an edge. The id is optional on input, since
/// hand-written documents may omit it; the store assigns missing ids on
/// load. Saved documents always carry explicit ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EdgeId>,
}

impl From<Edge> for EdgeRecord {
    fn from(edge: Edge) -> Self {
        EdgeRecord {
            from: edge.from,
            to: edge.to,
            id: Some(edge.id),
        }
    }
}

// ─── Partial updates ─────────────────────────────────────────────────────

/// A partial update for [`GraphStore::update_node`](crate::store::GraphStore::update_node).
///
/// Only provided fields change. Empty label/comment strings also mean
/// "leave unchanged", so a user can edit one form field without retyping
/// the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub label: Option<String>,
    pub comment: Option<String>,
    pub shape: Option<Shape>,
}

impl NodePatch {
    /// True when applying this patch would change nothing: no shape, and
    /// label/comment absent or empty.
    pub fn is_empty(&self) -> bool {
        self.label.as_deref().is_none_or(str::is_empty)
            && self.comment.as_deref().is_none_or(str::is_empty)
            && self.shape.is_none()
    }
}

// ─── Documents ───────────────────────────────────────────────────────────

/// The serialized graph: the fixed `{nodes, edges}` shape used by the
/// durable store, the JSON export, and atomic replacement. Field order is
/// the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    fn edge(from: i64, to: i64, id: u64) -> EdgeRecord {
        EdgeRecord {
            from: NodeId(from),
            to: NodeId(to),
            id: Some(EdgeId(id)),
        }
    }

    /// Seeded FAQ-style sample tree (8 nodes, 7 edges), so a fresh session
    /// has something to render before the first load.
    pub fn starter() -> Self {
        GraphDocument {
            nodes: vec![
                Node::new(NodeId(1), "What is the problem?"),
                Node::new(NodeId(2), "UI problem"),
                Node::new(NodeId(3), "Login problem"),
                Node::new(NodeId(4), "Data problem"),
                Node::new(NodeId(5), "Something else"),
                Node::new(NodeId(6), "Which framework version?"),
                Node::new(NodeId(7), "v1.x"),
                Node::new(NodeId(8), "v2 or later"),
            ],
            edges: vec![
                Self::edge(1, 3, 1),
                Self::edge(1, 2, 2),
                Self::edge(1, 4, 3),
                Self::edge(1, 5, 4),
                Self::edge(2, 6, 5),
                Self::edge(6, 7, 6),
                Self::edge(6, 8, 7),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shape_names_match_serialized_form() {
        for shape in Shape::ALL {
            let serialized = serde_json::to_string(&shape).unwrap();
            assert_eq!(serialized, format!("\"{}\"", shape.name()));
            assert_eq!(Shape::from_name(shape.name()), Some(shape));
        }
    }

    #[test]
    fn unknown_shape_name_is_rejected() {
        assert_eq!(Shape::from_name("rhombus"), None);
        assert!(serde_json::from_str::<Shape>("\"rhombus\"").is_err());
    }

    #[test]
    fn node_omits_absent_optional_fields() {
        let json = serde_json::to_string(&Node::new(NodeId(1), "root")).unwrap();
        assert_eq!(json, r#"{"id":1,"label":"root"}"#);
    }

    #[test]
    fn edge_record_accepts_missing_id() {
        let record: EdgeRecord = serde_json::from_str(r#"{"from":1,"to":2}"#).unwrap();
        assert_eq!(record.from, NodeId(1));
        assert_eq!(record.to, NodeId(2));
        assert_eq!(record.id, None);
    }

    #[test]
    fn empty_patch_detection() {
        assert!(NodePatch::default().is_empty());
        assert!(
            NodePatch {
                label: Some(String::new()),
                comment: Some(String::new()),
                shape: None,
            }
            .is_empty()
        );
        assert!(
            !NodePatch {
                label: Some("renamed".into()),
                ..Default::default()
            }
            .is_empty()
        );
        assert!(
            !NodePatch {
                shape: Some(Shape::Diamond),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn starter_document_is_a_tree() {
        let doc = GraphDocument::starter();
        assert_eq!(doc.nodes.len(), 8);
        assert_eq!(doc.edges.len(), 7);
        // Every edge endpoint refers to a seeded node.
        for edge in &doc.edges {
            assert!(doc.nodes.iter().any(|n| n.id == edge.from));
            assert!(doc.nodes.iter().any(|n| n.id == edge.to));
        }
    }
}
