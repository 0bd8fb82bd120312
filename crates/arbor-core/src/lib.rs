pub mod cascade;
pub mod error;
pub mod id;
pub mod import;
pub mod model;
pub mod persist;
pub mod store;

pub use cascade::{SubtreeRemoval, delete_subtree};
pub use error::{GraphError, ImportError, PersistError, StorageError};
pub use id::{EdgeId, FIRST_NODE_ID, NodeId};
pub use import::import_document;
pub use model::*;
pub use persist::{EXPORT_FILENAME, GRAPH_STORAGE_KEY, LocalStore, MemoryStore};
pub use store::GraphStore;
