//! The editor session.
//!
//! Owns the graph store, the selection, the durable store, and the host
//! collaborators; every UI command funnels through here, so all graph
//! state has a single writer. Structural mutations share one discipline:
//! mutate, spend the selection, autosave, redraw.

use crate::commands::{CommandInput, UiCommand};
use crate::error::EditorError;
use crate::host::{DownloadSink, Renderer, SnapshotPipeline};
use crate::selection::SelectionController;
use arbor_core::persist::{self, EXPORT_FILENAME};
use arbor_core::{
    GraphDocument, GraphError, GraphStore, ImportError, LocalStore, Node, NodeId, NodePatch,
    PersistError, Shape, SubtreeRemoval, cascade, import,
};
use std::path::Path;

/// Fixed filename for the PDF snapshot export.
pub const PDF_FILENAME: &str = "graph.pdf";

/// Comment panel text for nodes without commentary.
pub const NO_COMMENT: &str = "No comment available.";

pub struct EditorSession {
    store: GraphStore,
    selection: SelectionController,
    saved: Box<dyn LocalStore>,
    renderer: Box<dyn Renderer>,
    downloads: Box<dyn DownloadSink>,
    snapshots: Box<dyn SnapshotPipeline>,
}

impl EditorSession {
    /// Create an empty session over the given durable store and host
    /// collaborators.
    pub fn new(
        saved: Box<dyn LocalStore>,
        renderer: Box<dyn Renderer>,
        downloads: Box<dyn DownloadSink>,
        snapshots: Box<dyn SnapshotPipeline>,
    ) -> Self {
        Self {
            store: GraphStore::new(),
            selection: SelectionController::new(),
            saved,
            renderer,
            downloads,
            snapshots,
        }
    }

    /// Session with no-op collaborators, for tests and headless hosts.
    pub fn headless(saved: Box<dyn LocalStore>) -> Self {
        Self::new(
            saved,
            Box::new(crate::host::HeadlessRenderer),
            Box::new(crate::host::DiscardDownloads),
            Box::new(crate::host::NoSnapshotPipeline),
        )
    }

    /// Install the seeded starter tree, e.g. for a first run with nothing
    /// saved yet.
    pub fn install_starter_graph(&mut self) {
        self.store
            .replace_all(GraphDocument::starter())
            .expect("starter document is well-formed");
        self.selection.clear();
        self.redraw();
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selection.current()
    }

    /// Deterministic snapshot of the current graph.
    pub fn document(&self) -> GraphDocument {
        self.store.to_document()
    }

    // ─── Renderer events ─────────────────────────────────────────────────

    /// Record a renderer selection event and return the comment panel text
    /// for the node.
    pub fn on_node_selected(&mut self, id: NodeId) -> String {
        self.selection.select(id);
        self.store
            .get_node(id)
            .and_then(|n| n.comment.clone())
            .unwrap_or_else(|| NO_COMMENT.to_string())
    }

    /// Explicit deselect, e.g. the user clicked empty canvas.
    pub fn on_deselected(&mut self) {
        self.selection.clear();
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Add a new node under the selected one. Returns the new node's id.
    pub fn add_child(&mut self, input: &CommandInput) -> Result<NodeId, EditorError> {
        if input.label.is_empty() {
            return Err(EditorError::Notice(
                "Enter a label for the new node.".into(),
            ));
        }
        let parent = self
            .selection
            .require("Select a parent node before adding a new node.")?;
        if !self.store.contains_node(parent) {
            // Stale selection; nothing has been mutated yet.
            self.selection.clear();
            return Err(EditorError::Fault(GraphError::NodeNotFound(parent)));
        }

        let id = self.store.next_id();
        let mut node = Node::new(id, input.label.clone());
        if !input.comment.is_empty() {
            node.comment = Some(input.comment.clone());
        }
        self.store.add_node(node)?;
        self.store.add_edge(parent, id)?;
        log::info!("added node {id} under {parent}");

        self.finish_structural_edit()?;
        Ok(id)
    }

    /// Apply label/comment edits to the selected node. Empty fields leave
    /// the stored values unchanged.
    pub fn edit_node(&mut self, input: &CommandInput) -> Result<(), EditorError> {
        let target = self.selection.require("Select a node to edit.")?;
        let patch = NodePatch {
            label: Some(input.label.clone()),
            comment: Some(input.comment.clone()),
            shape: None,
        };
        if patch.is_empty() {
            return Err(EditorError::Notice(
                "Enter a new label or comment for the selected node.".into(),
            ));
        }

        self.store.update_node(target, patch)?;
        self.finish_structural_edit()
    }

    /// Change the selected node's shape hint. `shape_name` uses the
    /// renderer vocabulary.
    pub fn change_shape(&mut self, shape_name: &str) -> Result<(), EditorError> {
        let target = self.selection.require("Select a node to change its shape.")?;
        let Some(shape) = Shape::from_name(shape_name) else {
            return Err(EditorError::Notice(format!(
                "Unknown shape '{shape_name}'."
            )));
        };

        self.store.update_node(
            target,
            NodePatch {
                shape: Some(shape),
                ..Default::default()
            },
        )?;
        self.finish_structural_edit()
    }

    /// Delete the selected node and its entire subtree.
    pub fn delete_subtree(&mut self) -> Result<SubtreeRemoval, EditorError> {
        let target = self.selection.require("Select a node to delete.")?;
        let removal = cascade::delete_subtree(&mut self.store, target)?;
        self.finish_structural_edit()?;
        Ok(removal)
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    /// Persist the current graph under the fixed storage key.
    pub fn save(&mut self) -> Result<(), EditorError> {
        persist::save(self.saved.as_mut(), &self.store.to_document())?;
        Ok(())
    }

    /// Replace the current graph with the saved one.
    pub fn load(&mut self) -> Result<(), EditorError> {
        let doc = match persist::load(self.saved.as_ref()) {
            Ok(doc) => doc,
            Err(PersistError::NoSavedData) => {
                return Err(EditorError::Notice("No saved graph data found.".into()));
            }
            Err(err) => return Err(err.into()),
        };
        self.store.replace_all(doc)?;
        self.selection.clear();
        self.redraw();
        Ok(())
    }

    // ─── Import / export ─────────────────────────────────────────────────

    /// Export the pretty JSON document through the download sink as
    /// [`EXPORT_FILENAME`].
    pub fn export_json(&mut self) -> Result<(), EditorError> {
        let json = persist::export_json(&self.store.to_document());
        self.downloads
            .download(EXPORT_FILENAME, &json)
            .map_err(EditorError::Host)
    }

    /// Ask the snapshot pipeline for a PDF of the current diagram.
    /// Best-effort: failures are logged, not surfaced.
    pub fn export_pdf(&mut self) {
        if let Err(err) = self.snapshots.save_pdf(PDF_FILENAME) {
            log::warn!("pdf export failed: {err}");
        }
    }

    /// Replace the graph with an uploaded document. The store is untouched
    /// on any failure.
    pub fn import_text(&mut self, raw: &str) -> Result<(), EditorError> {
        let doc = import::import_document(raw)?;
        self.store.replace_all(doc).map_err(ImportError::Graph)?;
        self.selection.clear();
        self.redraw();
        Ok(())
    }

    /// Read a user-picked file and import it. The read is the session's
    /// one asynchronous boundary.
    pub async fn import_file(&mut self, path: &Path) -> Result<(), EditorError> {
        let raw = tokio::fs::read_to_string(path).await?;
        self.import_text(&raw)
    }

    // ─── Dispatch ────────────────────────────────────────────────────────

    /// Run a resolved UI command. One entry point per host toolbar event.
    pub fn dispatch(&mut self, command: UiCommand, input: &CommandInput) -> Result<(), EditorError> {
        match command {
            UiCommand::AddChild => self.add_child(input).map(|_| ()),
            UiCommand::EditNode => self.edit_node(input),
            UiCommand::DeleteSubtree => self.delete_subtree().map(|_| ()),
            UiCommand::ChangeShape => self.change_shape(&input.shape),
            UiCommand::SaveGraph => self.save(),
            UiCommand::LoadGraph => self.load(),
            UiCommand::ExportJson => self.export_json(),
            UiCommand::ExportPdf => {
                self.export_pdf();
                Ok(())
            }
            UiCommand::ImportJson => match &input.upload {
                Some(raw) => self.import_text(raw),
                None => Err(EditorError::Notice("No file selected.".into())),
            },
        }
    }

    /// Shared tail of every structural mutation: the selection is spent,
    /// the renderer clears its highlight, the graph autosaves, and the
    /// diagram is redrawn.
    fn finish_structural_edit(&mut self) -> Result<(), EditorError> {
        self.selection.clear();
        self.renderer.unselect_all();
        self.save()?;
        self.redraw();
        Ok(())
    }

    fn redraw(&mut self) {
        let doc = self.store.to_document();
        self.renderer.redraw(&doc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::MemoryStore;

    fn session_with_root() -> EditorSession {
        let mut session = EditorSession::headless(Box::new(MemoryStore::new()));
        session.install_starter_graph();
        session
    }

    #[test]
    fn add_child_requires_a_label_first() {
        let mut session = session_with_root();
        session.on_node_selected(NodeId(1));

        let err = session.add_child(&CommandInput::default()).unwrap_err();
        assert_eq!(err.to_string(), "Enter a label for the new node.");
        // Selection survives a rejected command.
        assert_eq!(session.selected(), Some(NodeId(1)));
    }

    #[test]
    fn add_child_requires_a_selection() {
        let mut session = session_with_root();
        let input = CommandInput {
            label: "orphan".into(),
            ..Default::default()
        };

        let err = session.add_child(&input).unwrap_err();
        assert!(err.is_notice());
        assert_eq!(session.store().node_count(), 8);
    }

    #[test]
    fn selection_event_returns_comment_fallback() {
        let mut session = session_with_root();
        assert_eq!(session.on_node_selected(NodeId(1)), NO_COMMENT);
    }

    #[test]
    fn shape_change_rejects_unknown_vocabulary() {
        let mut session = session_with_root();
        session.on_node_selected(NodeId(1));

        let err = session.change_shape("blob").unwrap_err();
        assert!(err.is_notice());
        assert_eq!(session.store().get_node(NodeId(1)).unwrap().shape, None);
    }

    #[test]
    fn explicit_deselect_clears_the_selection() {
        let mut session = session_with_root();
        session.on_node_selected(NodeId(4));
        session.on_deselected();
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn dispatch_import_without_a_file_is_a_notice() {
        let mut session = session_with_root();
        let err = session
            .dispatch(UiCommand::ImportJson, &CommandInput::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "No file selected.");
    }
}
