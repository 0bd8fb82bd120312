//! Integration tests: export → import round-trip.
//!
//! Verifies which parts of a graph survive the trip through the pretty
//! JSON export and the import normalizer. Node identity, labels, comments,
//! and shapes survive; edges deliberately do not, because the importer
//! rebuilds edges solely from per-node `connections` and the exporter never
//! writes that field. The tests pin the gap down as current behavior.

use arbor_core::import::import_document;
use arbor_core::model::{GraphDocument, Node, Shape};
use arbor_core::persist::export_json;
use arbor_core::store::GraphStore;
use arbor_core::NodeId;
use pretty_assertions::assert_eq;

/// Export `store`, re-import the text, and return the normalized document.
fn round_trip(store: &GraphStore) -> GraphDocument {
    let exported = export_json(&store.to_document());
    import_document(&exported).expect("exported documents always re-import")
}

fn sample_store() -> GraphStore {
    let mut store = GraphStore::new();
    let mut root = Node::new(NodeId(1), "root").with_comment("entry point");
    root.shape = Some(Shape::Diamond);
    store.add_node(root).unwrap();
    store.add_node(Node::new(NodeId(2), "left")).unwrap();
    store.add_node(Node::new(NodeId(5), "right")).unwrap();
    store.add_edge(NodeId(1), NodeId(2)).unwrap();
    store.add_edge(NodeId(1), NodeId(5)).unwrap();
    store
}

#[test]
fn node_identity_and_labels_survive() {
    let store = sample_store();
    let doc = round_trip(&store);

    let mut ids: Vec<NodeId> = doc.nodes.iter().map(|n| n.id).collect();
    ids.sort();
    assert_eq!(ids, vec![NodeId(1), NodeId(2), NodeId(5)]);

    let root = doc.nodes.iter().find(|n| n.id == NodeId(1)).unwrap();
    assert_eq!(root.label, "root");
    assert_eq!(root.comment.as_deref(), Some("entry point"));
    assert_eq!(root.shape, Some(Shape::Diamond));
}

#[test]
fn edges_do_not_survive_the_round_trip() {
    let store = sample_store();
    assert_eq!(store.edge_count(), 2);

    let doc = round_trip(&store);

    // The exporter writes explicit `edges`; the importer only reads
    // per-node `connections`. Current behavior: edges are lost.
    assert!(doc.edges.is_empty());
}

#[test]
fn round_tripped_document_loads_into_a_store() {
    let doc = round_trip(&sample_store());
    let store = GraphStore::from_document(doc).unwrap();

    assert_eq!(store.node_count(), 3);
    assert_eq!(store.edge_count(), 0);
    assert_eq!(store.next_id(), NodeId(6));
}

#[test]
fn fixture_with_connections_imports_fully() {
    let raw = include_str!("fixtures/faq_tree.json");
    let doc = import_document(raw).unwrap();
    let store = GraphStore::from_document(doc).unwrap();

    assert_eq!(store.node_count(), 4);
    assert_eq!(store.edge_count(), 3);
    assert_eq!(store.edges_from(NodeId(1)).len(), 2);
    assert_eq!(
        store.get_node(NodeId(3)).unwrap().comment.as_deref(),
        Some("escalate to support")
    );
}

#[test]
fn fixture_in_export_shape_loses_its_edges() {
    let raw = include_str!("fixtures/exported_graph.json");
    let doc = import_document(raw).unwrap();

    assert_eq!(doc.nodes.len(), 3);
    assert!(doc.edges.is_empty());
}
