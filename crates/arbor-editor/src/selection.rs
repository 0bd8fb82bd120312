//! Selection state.
//!
//! Two states: nothing selected, or exactly one node selected. Mutation
//! entry points that need a target go through [`SelectionController::require`],
//! which produces the user-facing precondition notice when nothing is
//! selected. The session clears the selection after every structural edit
//! and whenever the selected node is removed, so the held id never
//! outlives its node.

use crate::error::EditorError;
use arbor_core::NodeId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    current: Option<NodeId>,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a renderer selection event.
    pub fn select(&mut self, id: NodeId) {
        self.current = Some(id);
    }

    /// Drop any selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// The selected node id, or a [`EditorError::Notice`] built from
    /// `message`.
    pub fn require(&self, message: &str) -> Result<NodeId, EditorError> {
        self.current
            .ok_or_else(|| EditorError::Notice(message.to_string()))
    }
}
