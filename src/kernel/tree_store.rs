use std::sync::Arc;

use crate::models::{FileTree, FileTreeError, NewNodeKind, Node, NodeId};

/// Owns the current tree snapshot and mints node ids.
///
/// Every successful mutation swaps in a new [`FileTree`] value; a failed one
/// leaves the snapshot untouched.
#[derive(Debug, Clone)]
pub struct TreeStore {
    tree: FileTree,
    /// `None` once `u64::MAX` has been handed out (or loaded).
    next_id: Option<u64>,
}

impl TreeStore {
    pub fn new(tree: FileTree) -> Self {
        let next_id = tree.max_id().map_or(Some(1), |id| id.get().checked_add(1));
        Self { tree, next_id }
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn snapshot(&self) -> FileTree {
        self.tree.clone()
    }

    pub fn find(&self, id: NodeId) -> Option<&Arc<Node>> {
        self.tree.find(id)
    }

    pub fn insert(&mut self, parent: NodeId, kind: NewNodeKind) -> Result<NodeId, FileTreeError> {
        let raw = self.next_id.ok_or(FileTreeError::IdsExhausted)?;
        let id = NodeId::new(raw);
        let name = kind.default_name(id);
        let node = match kind {
            NewNodeKind::Folder => Node::folder(id, name, Vec::new()),
            _ => Node::file(id, name),
        };

        self.tree = self.tree.insert_child(parent, node)?;
        self.next_id = raw.checked_add(1);
        tracing::debug!(id = %id, parent = %parent, kind = kind.as_str(), "node inserted");
        Ok(id)
    }

    /// Removes `id` and its subtree, returning what was removed.
    pub fn delete(&mut self, id: NodeId) -> Option<Arc<Node>> {
        let (tree, removed) = self.tree.remove(id)?;
        self.tree = tree;
        tracing::debug!(id = %id, "node deleted");
        Some(removed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tree_store.rs"]
mod tests;
