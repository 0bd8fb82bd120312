//! Error taxonomy, one enum per layer.
//!
//! Store and cascade invariants live in [`GraphError`], the durable-store
//! round-trip in [`PersistError`], and external document import in
//! [`ImportError`]. Backend failures surface as the opaque [`StorageError`]
//! and are never swallowed.

use crate::id::NodeId;
use thiserror::Error;

/// Store and cascade-deletion invariant violations.
///
/// Under correct command gating these do not occur; a `DuplicateId` or
/// `NodeNotFound` reaching the user indicates a gating bug rather than a
/// recoverable input problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this id is already in the store.
    #[error("node {0} already exists")]
    DuplicateId(NodeId),

    /// No node with this id.
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    /// An edge references a node id absent from the store.
    #[error("edge endpoint {0} does not exist")]
    EdgeEndpointMissing(NodeId),

    /// A from→to cycle was reached during subtree traversal. Graphs must be
    /// acyclic in the from→to direction; nothing was removed.
    #[error("cycle through node {0}; subtree deletion aborted")]
    CycleDetected(NodeId),
}

/// Opaque durable-store backend failure (unavailable, full, unwritable).
#[derive(Debug, Error)]
#[error("storage backend failure: {0}")]
pub struct StorageError(pub String);

/// Failures of the load path against the durable store.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Nothing stored under the graph key yet. Surfaced to the user as a
    /// notice, not a crash.
    #[error("no saved graph data found")]
    NoSavedData,

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored value does not parse as a graph document.
    #[error("saved graph data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures of the external-document import pipeline.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The uploaded text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A structurally required field is absent.
    #[error("invalid graph document: missing '{0}'")]
    MissingField(&'static str),

    /// The normalized document violates a store invariant (duplicate node
    /// id, or a connection to an absent node).
    #[error(transparent)]
    Graph(#[from] GraphError),
}
