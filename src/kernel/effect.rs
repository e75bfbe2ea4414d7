use crate::models::NodeId;

/// Notifications for the presentation layer produced by a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    NodeCreated { id: NodeId, parent: NodeId },
    NodeDeleted { id: NodeId },
    SelectionCleared,
}
