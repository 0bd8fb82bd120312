//! Durable persistence and JSON export.
//!
//! The durable store is a synchronous key-value collaborator shaped like a
//! browser's origin-scoped storage: string keys, string values. The whole
//! graph document lives under one fixed key and is overwritten on every
//! save. Export produces the same document, pretty-printed for download.

use crate::error::{PersistError, StorageError};
use crate::model::GraphDocument;
use std::collections::HashMap;

/// Fixed key the graph document is stored under.
pub const GRAPH_STORAGE_KEY: &str = "treeGraphData";

/// Fixed filename for the JSON document download.
pub const EXPORT_FILENAME: &str = "tree_graph.json";

/// Synchronous durable key-value store.
pub trait LocalStore {
    /// Read a key. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store for tests and embedded hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialize `doc` under [`GRAPH_STORAGE_KEY`], overwriting any prior save.
/// A backend failure propagates; it is never swallowed.
pub fn save(store: &mut dyn LocalStore, doc: &GraphDocument) -> Result<(), StorageError> {
    let json = serde_json::to_string(doc).expect("graph document serialization is infallible");
    store.set(GRAPH_STORAGE_KEY, &json)?;
    log::debug!(
        "saved graph: {} nodes, {} edges",
        doc.nodes.len(),
        doc.edges.len()
    );
    Ok(())
}

/// Load the document saved under [`GRAPH_STORAGE_KEY`]. An absent key is
/// [`PersistError::NoSavedData`]; callers surface it as a notice.
pub fn load(store: &dyn LocalStore) -> Result<GraphDocument, PersistError> {
    let json = store
        .get(GRAPH_STORAGE_KEY)?
        .ok_or(PersistError::NoSavedData)?;
    Ok(serde_json::from_str(&json)?)
}

/// Pretty-printed export document: 2-space indentation, `nodes` before
/// `edges`.
#[must_use]
pub fn export_json(doc: &GraphDocument) -> String {
    serde_json::to_string_pretty(doc).expect("graph document serialization is infallible")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::NodeId;
    use crate::model::Node;
    use pretty_assertions::assert_eq;

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let doc = GraphDocument::starter();

        save(&mut store, &doc).unwrap();
        let loaded = load(&store).unwrap();

        assert_eq!(loaded, doc);
    }

    #[test]
    fn load_without_prior_save_reports_no_saved_data() {
        let store = MemoryStore::new();
        assert!(matches!(load(&store), Err(PersistError::NoSavedData)));
    }

    #[test]
    fn load_of_garbage_reports_malformed() {
        let mut store = MemoryStore::new();
        store.set(GRAPH_STORAGE_KEY, "not json at all").unwrap();
        assert!(matches!(load(&store), Err(PersistError::Malformed(_))));
    }

    #[test]
    fn save_overwrites_the_previous_document() {
        let mut store = MemoryStore::new();
        save(&mut store, &GraphDocument::starter()).unwrap();

        let small = GraphDocument {
            nodes: vec![Node::new(NodeId(1), "only")],
            edges: vec![],
        };
        save(&mut store, &small).unwrap();

        assert_eq!(load(&store).unwrap(), small);
    }

    #[test]
    fn export_uses_two_space_indentation_and_stable_key_order() {
        let doc = GraphDocument {
            nodes: vec![Node::new(NodeId(1), "root")],
            edges: vec![],
        };

        let json = export_json(&doc);
        let expected = "{\n  \"nodes\": [\n    {\n      \"id\": 1,\n      \"label\": \"root\"\n    }\n  ],\n  \"edges\": []\n}";
        assert_eq!(json, expected);
    }
}
