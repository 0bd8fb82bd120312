pub mod commands;
pub mod error;
pub mod host;
pub mod selection;
pub mod session;
pub mod storage;

pub use commands::{CommandInput, UiCommand};
pub use error::EditorError;
pub use host::{
    DiscardDownloads, DownloadSink, HeadlessRenderer, NoSnapshotPipeline, Renderer,
    SnapshotPipeline,
};
pub use selection::SelectionController;
pub use session::{EditorSession, NO_COMMENT, PDF_FILENAME};
pub use storage::DirStore;
