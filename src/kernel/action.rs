use crate::models::{NewNodeKind, NodeId};

/// Everything the presentation layer can ask of the kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A row was activated: files get selected, folders expand/collapse.
    ClickNode {
        id: NodeId,
    },
    SetExpanded {
        id: NodeId,
        expanded: bool,
    },
    AddNode {
        parent: NodeId,
        kind: NewNodeKind,
    },
    DeleteNode {
        id: NodeId,
    },
    FilterChange {
        query: String,
    },
    ToggleEdit {
        id: NodeId,
    },
    SetContent {
        id: NodeId,
        text: String,
    },
    /// Drops view state of ids that are gone from the tree.
    PruneStale,
}
