//! Subtree deletion.
//!
//! Deleting a node takes its entire reachable subtree with it: every node
//! reachable along from→to edges, plus every edge touching a removed node.
//! The traversal runs on an explicit stack with a visited set, so a
//! violated acyclicity precondition surfaces as
//! [`GraphError::CycleDetected`] instead of unbounded recursion. Nothing is
//! removed until the traversal has fully completed.

use crate::error::GraphError;
use crate::id::{EdgeId, NodeId};
use crate::store::GraphStore;
use std::collections::HashMap;

/// What [`delete_subtree`] removed. Nodes are listed deepest-first, the
/// order they left the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtreeRemoval {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
}

/// Visit state for the walk. `Open` nodes are on the current traversal
/// path; an edge back into one is a from→to cycle.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Open,
    Closed,
}

/// One node's place in the explicit traversal stack.
struct Frame {
    node: NodeId,
    children: std::vec::IntoIter<NodeId>,
}

impl Frame {
    fn new(node: NodeId, store: &GraphStore) -> Self {
        let children: Vec<NodeId> = store.edges_from(node).iter().map(|e| e.to).collect();
        Frame {
            node,
            children: children.into_iter(),
        }
    }
}

/// Remove `root` and every node reachable from it along from→to edges,
/// together with all edges touching any removed node.
///
/// Fails with [`GraphError::NodeNotFound`] when `root` is absent and with
/// [`GraphError::CycleDetected`] when the walk closes a from→to cycle; in
/// both cases the store is untouched. Nodes reachable along more than one
/// path (diamonds) are removed once.
pub fn delete_subtree(store: &mut GraphStore, root: NodeId) -> Result<SubtreeRemoval, GraphError> {
    if !store.contains_node(root) {
        return Err(GraphError::NodeNotFound(root));
    }

    // Collect the doomed set first. Post-order: a node is recorded after
    // all of its children, so `order` runs deepest-first.
    let mut visit: HashMap<NodeId, Visit> = HashMap::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut stack = vec![Frame::new(root, store)];
    visit.insert(root, Visit::Open);

    while let Some(frame) = stack.last_mut() {
        match frame.children.next() {
            Some(child) => match visit.get(&child) {
                Some(Visit::Open) => return Err(GraphError::CycleDetected(child)),
                Some(Visit::Closed) => {} // diamond: already scheduled
                None => {
                    visit.insert(child, Visit::Open);
                    stack.push(Frame::new(child, store));
                }
            },
            None => {
                let done = frame.node;
                stack.pop();
                visit.insert(done, Visit::Closed);
                order.push(done);
            }
        }
    }

    // Batch removal. Incident edges vanish with their nodes; record each
    // one before its first endpoint goes away so the report is complete.
    let mut edges: Vec<EdgeId> = Vec::new();
    for &node in &order {
        edges.extend(store.edges_touching(node).iter().map(|e| e.id));
        store.remove_node(node);
    }

    log::debug!(
        "deleted subtree of {root}: {} nodes, {} edges",
        order.len(),
        edges.len()
    );
    Ok(SubtreeRemoval {
        nodes: order,
        edges,
    })
}
