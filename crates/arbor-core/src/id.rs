use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a node. Caller-assigned by imported documents, or
/// store-assigned via [`GraphStore::next_id`](crate::store::GraphStore::next_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

/// The id handed out for the first node of an empty store.
pub const FIRST_NODE_ID: NodeId = NodeId(1);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an edge. Always store-assigned; persisted documents carry
/// them so ids survive a save/load round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&NodeId(7)).unwrap(), "7");
        let id: NodeId = serde_json::from_str("42").unwrap();
        assert_eq!(id, NodeId(42));
    }

    #[test]
    fn ids_order_numerically() {
        assert!(NodeId(2) < NodeId(10));
        assert!(EdgeId(2) < EdgeId(10));
    }
}
