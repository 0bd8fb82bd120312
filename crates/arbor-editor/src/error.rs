use arbor_core::{GraphError, ImportError, PersistError, StorageError};
use thiserror::Error;

/// Failures surfaced by the editor session.
///
/// `Notice` carries the user-facing precondition and validation messages;
/// hosts render those as plain notices. Everything else is a fault or a
/// collaborator failure and warrants an error dialog or log entry.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Precondition not met. Prior state is preserved.
    #[error("{0}")]
    Notice(String),

    /// A store invariant was violated. Under correct command gating this
    /// does not happen; it indicates a gating bug.
    #[error("graph invariant violated: {0}")]
    Fault(#[from] GraphError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Import(#[from] ImportError),

    /// A host collaborator (download sink) reported a failure.
    #[error("host collaborator failure: {0}")]
    Host(String),

    /// The user-picked file could not be read.
    #[error("file read failed: {0}")]
    FileRead(#[from] std::io::Error),
}

impl EditorError {
    /// True when hosts should present this as a plain notice rather than
    /// an error dialog.
    #[must_use]
    pub fn is_notice(&self) -> bool {
        matches!(self, EditorError::Notice(_))
    }
}
