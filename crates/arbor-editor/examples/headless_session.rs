//! Headless end-to-end demo: build the starter tree, grow it, persist it,
//! and export the JSON document to disk.
//!
//! Run with `cargo run -p arbor-editor --example headless_session [dir]`.
//! Re-running against the same directory resumes from the saved graph.

use arbor_core::{GraphDocument, NodeId};
use arbor_editor::commands::{CommandInput, UiCommand};
use arbor_editor::host::{DownloadSink, NoSnapshotPipeline, Renderer};
use arbor_editor::session::EditorSession;
use arbor_editor::storage::DirStore;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Renderer that reports each redraw on stdout.
struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn redraw(&mut self, doc: &GraphDocument) {
        println!(
            "redraw: {} nodes, {} edges",
            doc.nodes.len(),
            doc.edges.len()
        );
    }

    fn unselect_all(&mut self) {}
}

/// Download sink that writes exported documents into the session directory.
struct FileDownloads {
    dir: PathBuf,
}

impl DownloadSink for FileDownloads {
    fn download(&mut self, filename: &str, contents: &str) -> Result<(), String> {
        let path = self.dir.join(filename);
        fs::write(&path, contents).map_err(|e| e.to_string())?;
        println!("downloaded {}", path.display());
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let dir = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("arbor-session"), PathBuf::from);
    let saved = DirStore::open(&dir).expect("session directory must be writable");

    let mut session = EditorSession::new(
        Box::new(saved),
        Box::new(ConsoleRenderer),
        Box::new(FileDownloads { dir: dir.clone() }),
        Box::new(NoSnapshotPipeline),
    );

    // Resume from the saved graph when there is one, else seed the tree.
    if session.load().is_err() {
        session.install_starter_graph();
    }

    // Grow the tree under the root, the way a toolbar round-trip would.
    println!(
        "selected root; comment panel: {}",
        session.on_node_selected(NodeId(1))
    );
    let input = CommandInput {
        label: "Added by the headless demo".into(),
        comment: "created by examples/headless_session.rs".into(),
        ..Default::default()
    };
    session
        .dispatch(UiCommand::AddChild, &input)
        .expect("add-child with a label and a selection succeeds");

    session
        .dispatch(UiCommand::ExportJson, &CommandInput::default())
        .expect("export writes next to the session store");

    println!(
        "session stored under {}; {} nodes total",
        dir.display(),
        session.store().node_count()
    );
}
