//! The canonical node/edge store.
//!
//! A `StableDiGraph` holds node and edge records as weights, and `HashMap`
//! indexes map the document-visible integer ids to graph indices. The
//! indexes are kept synchronized on every mutation. Bulk replacement
//! validates into a fresh store and swaps, so a rejected document never
//! disturbs current contents.

use crate::error::GraphError;
use crate::id::{EdgeId, FIRST_NODE_ID, NodeId};
use crate::model::{Edge, EdgeRecord, GraphDocument, Node, NodePatch};
use petgraph::Direction;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::stable_graph::StableDiGraph;
use std::collections::HashMap;

/// Owner of node/edge identity and lifetime. Single-writer by convention:
/// one store per editing session, mutated only from that session.
#[derive(Debug, Clone)]
pub struct GraphStore {
    graph: StableDiGraph<Node, Edge>,
    /// Index from node id → graph index, updated on every mutation.
    id_index: HashMap<NodeId, NodeIndex>,
    /// Index from edge id → graph index, updated on every mutation.
    edge_index: HashMap<EdgeId, EdgeIndex>,
    next_edge_id: EdgeId,
}

impl GraphStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            id_index: HashMap::new(),
            edge_index: HashMap::new(),
            next_edge_id: EdgeId(1),
        }
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Insert a node. Fails if the id is already taken.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.id_index.contains_key(&node.id) {
            return Err(GraphError::DuplicateId(node.id));
        }
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.id_index.insert(id, idx);
        log::debug!("added node {id}");
        Ok(())
    }

    /// The id the next added node should get: `max(existing) + 1`, or
    /// [`FIRST_NODE_ID`] when the store is empty. Deterministic and
    /// collision-free under the single-writer discipline.
    #[must_use]
    pub fn next_id(&self) -> NodeId {
        self.id_index
            .keys()
            .max()
            .map_or(FIRST_NODE_ID, |id| NodeId(id.0 + 1))
    }

    /// Merge `patch` into an existing node. Absent fields are left
    /// untouched; empty label/comment strings also mean "no change".
    pub fn update_node(&mut self, id: NodeId, patch: NodePatch) -> Result<(), GraphError> {
        let idx = *self.id_index.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        let node = &mut self.graph[idx];
        if let Some(label) = patch.label.filter(|l| !l.is_empty()) {
            node.label = label;
        }
        if let Some(comment) = patch.comment.filter(|c| !c.is_empty()) {
            node.comment = Some(comment);
        }
        if let Some(shape) = patch.shape {
            node.shape = Some(shape);
        }
        Ok(())
    }

    /// Remove a node and every edge touching it, keeping the indexes
    /// synchronized. Removing an absent id is a no-op.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let idx = self.id_index.remove(&id)?;
        let incident: Vec<EdgeId> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .map(|e| e.weight().id)
            .collect();
        for edge_id in incident {
            self.edge_index.remove(&edge_id);
        }
        self.graph.remove_node(idx)
    }

    /// Remove a single edge. Removing an absent id is a no-op.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let idx = self.edge_index.remove(&id)?;
        self.graph.remove_edge(idx)
    }

    /// Connect `from` → `to`, assigning a fresh edge id. Both endpoints
    /// must exist; duplicate `(from, to)` pairs are permitted.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<EdgeId, GraphError> {
        let from_idx = self
            .index_of(from)
            .ok_or(GraphError::EdgeEndpointMissing(from))?;
        let to_idx = self
            .index_of(to)
            .ok_or(GraphError::EdgeEndpointMissing(to))?;
        let id = self.next_edge_id;
        self.next_edge_id = EdgeId(id.0 + 1);
        let idx = self.graph.add_edge(from_idx, to_idx, Edge { id, from, to });
        self.edge_index.insert(id, idx);
        log::debug!("added edge {id}: {from} -> {to}");
        Ok(id)
    }

    /// Atomically discard current contents and install `doc`. On error the
    /// store is left untouched.
    pub fn replace_all(&mut self, doc: GraphDocument) -> Result<(), GraphError> {
        *self = Self::from_document(doc)?;
        Ok(())
    }

    /// Build a store from a persisted document. Edge records without an
    /// explicit id are assigned ids past the largest explicit one.
    pub fn from_document(doc: GraphDocument) -> Result<Self, GraphError> {
        let mut store = Self::new();
        for node in doc.nodes {
            store.add_node(node)?;
        }
        let mut next = doc
            .edges
            .iter()
            .filter_map(|e| e.id)
            .max()
            .map_or(1, |id| id.0 + 1);
        for record in &doc.edges {
            let from_idx = store
                .index_of(record.from)
                .ok_or(GraphError::EdgeEndpointMissing(record.from))?;
            let to_idx = store
                .index_of(record.to)
                .ok_or(GraphError::EdgeEndpointMissing(record.to))?;
            let id = record.id.unwrap_or_else(|| {
                let assigned = EdgeId(next);
                next += 1;
                assigned
            });
            let idx = store.graph.add_edge(
                from_idx,
                to_idx,
                Edge {
                    id,
                    from: record.from,
                    to: record.to,
                },
            );
            store.edge_index.insert(id, idx);
        }
        store.next_edge_id = EdgeId(next);
        Ok(store)
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.id_index.get(&id).map(|idx| &self.graph[*idx])
    }

    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.id_index.contains_key(&id)
    }

    /// All nodes, in unspecified order. Use [`GraphStore::to_document`]
    /// for a deterministic ordering.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// All edges, in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    /// Outgoing (parent→child) edges of `id`. Empty for unknown ids.
    #[must_use]
    pub fn edges_from(&self, id: NodeId) -> Vec<Edge> {
        match self.index_of(id) {
            Some(idx) => self
                .graph
                .edges_directed(idx, Direction::Outgoing)
                .map(|e| *e.weight())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Edges with `id` at either endpoint, ordered by edge id. Empty for
    /// unknown ids.
    #[must_use]
    pub fn edges_touching(&self, id: NodeId) -> Vec<Edge> {
        let Some(idx) = self.index_of(id) else {
            return Vec::new();
        };
        let mut edges: Vec<Edge> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .map(|e| *e.weight())
            .collect();
        // A self-loop shows up in both directions; keep one copy.
        edges.sort_by_key(|e| e.id);
        edges.dedup_by_key(|e| e.id);
        edges
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Deterministic snapshot for persistence and export: nodes and edges
    /// ordered by id.
    #[must_use]
    pub fn to_document(&self) -> GraphDocument {
        let mut nodes: Vec<Node> = self.nodes().cloned().collect();
        nodes.sort_by_key(|n| n.id);
        let mut edges: Vec<EdgeRecord> = self.edges().map(|e| EdgeRecord::from(*e)).collect();
        edges.sort_by_key(|e| e.id);
        GraphDocument { nodes, edges }
    }

    fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
