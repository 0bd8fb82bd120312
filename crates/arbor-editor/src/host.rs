//! Host collaborator seams.
//!
//! The session drives rendering, downloads, and snapshot export through
//! these traits; hosts inject implementations at construction time. The
//! core never touches a concrete toolkit, which is what keeps the graph
//! logic testable headlessly.

use arbor_core::GraphDocument;

/// The interactive diagram view.
///
/// Hosts feed its selection events back into
/// [`EditorSession::on_node_selected`](crate::session::EditorSession::on_node_selected);
/// the session calls these control operations after structural mutations.
pub trait Renderer {
    /// Present the given document, replacing the previous drawing.
    fn redraw(&mut self, doc: &GraphDocument);

    /// Clear any visual selection highlight.
    fn unselect_all(&mut self);
}

/// Receives exported documents as client-side downloads.
pub trait DownloadSink {
    fn download(&mut self, filename: &str, contents: &str) -> Result<(), String>;
}

/// Raster snapshot + PDF assembly pipeline. Its failure mode is opaque;
/// the session treats it as best-effort and reports failures via log.
pub trait SnapshotPipeline {
    fn save_pdf(&mut self, filename: &str) -> Result<(), String>;
}

/// Renderer that draws nothing. For headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessRenderer;

impl Renderer for HeadlessRenderer {
    fn redraw(&mut self, _doc: &GraphDocument) {}
    fn unselect_all(&mut self) {}
}

/// Download sink that accepts and drops documents. For headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardDownloads;

impl DownloadSink for DiscardDownloads {
    fn download(&mut self, _filename: &str, _contents: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Placeholder for hosts without a snapshot pipeline; always fails, which
/// the session reports via log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSnapshotPipeline;

impl SnapshotPipeline for NoSnapshotPipeline {
    fn save_pdf(&mut self, _filename: &str) -> Result<(), String> {
        Err("no snapshot pipeline attached".to_string())
    }
}
