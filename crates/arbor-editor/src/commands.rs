//! UI command dispatch table.
//!
//! Maps the stable command names emitted by host toolbars to semantic
//! [`UiCommand`]s, so hosts stay decoupled from session method names. The
//! table lives in Rust so every host (native shell, web bridge, tests)
//! resolves names identically.

/// Semantic editor commands, one per toolbar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Add a new node under the selected one.
    AddChild,
    /// Apply label/comment edits to the selected node.
    EditNode,
    /// Delete the selected node and its subtree.
    DeleteSubtree,
    /// Change the selected node's shape hint.
    ChangeShape,
    SaveGraph,
    LoadGraph,
    ExportJson,
    ExportPdf,
    ImportJson,
}

impl UiCommand {
    /// Resolve a host command name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add-node" => Some(Self::AddChild),
            "edit-node" => Some(Self::EditNode),
            "delete-node" => Some(Self::DeleteSubtree),
            "change-shape" => Some(Self::ChangeShape),
            "save-graph" => Some(Self::SaveGraph),
            "load-graph" => Some(Self::LoadGraph),
            "export-json" => Some(Self::ExportJson),
            "export-pdf" => Some(Self::ExportPdf),
            "upload-json" => Some(Self::ImportJson),
            _ => None,
        }
    }

    /// The stable command name, inverse of [`UiCommand::from_name`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddChild => "add-node",
            Self::EditNode => "edit-node",
            Self::DeleteSubtree => "delete-node",
            Self::ChangeShape => "change-shape",
            Self::SaveGraph => "save-graph",
            Self::LoadGraph => "load-graph",
            Self::ExportJson => "export-json",
            Self::ExportPdf => "export-pdf",
            Self::ImportJson => "upload-json",
        }
    }

    /// Every command, for hosts that wire listeners in a loop.
    pub const ALL: [UiCommand; 9] = [
        Self::AddChild,
        Self::EditNode,
        Self::DeleteSubtree,
        Self::ChangeShape,
        Self::SaveGraph,
        Self::LoadGraph,
        Self::ExportJson,
        Self::ExportPdf,
        Self::ImportJson,
    ];
}

/// Raw form-field values accompanying a command dispatch. Hosts pass the
/// input fields as-is; emptiness checks and "empty means unchanged" rules
/// are the session's business, not the host's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInput {
    pub label: String,
    pub comment: String,
    /// Shape-picker value, in the renderer vocabulary.
    pub shape: String,
    /// Raw text of an uploaded file, when the host already read it.
    pub upload: Option<String>,
}
