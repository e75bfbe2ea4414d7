use compact_str::CompactString;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::{ContentEntry, FileKind, FileTree, Node, NodeId};

pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "Sample content for ";

/// Active node plus per-node view state (expand flags, content buffers).
///
/// Keyed purely by [`NodeId`]; nothing here is stored on the nodes themselves,
/// so tree rebuilds never disturb it.
#[derive(Debug, Clone)]
pub struct SelectionController {
    active: Option<NodeId>,
    expanded: FxHashSet<NodeId>,
    contents: FxHashMap<NodeId, ContentEntry>,
    placeholder_prefix: CompactString,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_PREFIX)
    }
}

impl SelectionController {
    pub fn new(placeholder_prefix: impl Into<CompactString>) -> Self {
        Self {
            active: None,
            expanded: FxHashSet::default(),
            contents: FxHashMap::default(),
            placeholder_prefix: placeholder_prefix.into(),
        }
    }

    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// Files become active; folders toggle their expand flag instead.
    /// Returns whether anything changed.
    pub fn select(&mut self, node: &Node) -> bool {
        if node.is_folder() {
            self.toggle_expand(node.id());
            return true;
        }
        let prev = self.active.replace(node.id());
        prev != Some(node.id())
    }

    pub fn clear_selection(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expanded(&self) -> &FxHashSet<NodeId> {
        &self.expanded
    }

    /// Returns the new state.
    pub fn toggle_expand(&mut self, id: NodeId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        if expanded {
            self.expanded.insert(id)
        } else {
            self.expanded.remove(&id)
        }
    }

    pub fn entry(&self, id: NodeId) -> Option<&ContentEntry> {
        self.contents.get(&id)
    }

    pub fn entry_count(&self) -> usize {
        self.contents.len()
    }

    /// Buffer of a text file, created from the placeholder on first access.
    /// `None` for folders, images and unsupported files.
    pub fn content(&mut self, node: &Node) -> Option<&str> {
        self.entry_mut(node).map(|entry| entry.text())
    }

    /// Creates the buffer of a text file if it has none yet.
    /// Returns whether an entry was created.
    pub fn ensure_content(&mut self, node: &Node) -> bool {
        if !is_text_file(node) || self.contents.contains_key(&node.id()) {
            return false;
        }
        let text = self.placeholder(node);
        self.contents.insert(node.id(), ContentEntry::new(text));
        true
    }

    /// Text a buffer starts from before anything is written to it.
    pub fn placeholder(&self, node: &Node) -> String {
        format!("{}{}", self.placeholder_prefix, node.name())
    }

    /// Overwrites the buffer of one text file. Returns whether it changed.
    pub fn set_content(&mut self, node: &Node, text: String) -> bool {
        if !is_text_file(node) {
            return false;
        }
        match self.contents.get_mut(&node.id()) {
            Some(entry) => entry.set_text(text),
            None => {
                self.contents.insert(node.id(), ContentEntry::new(text));
                true
            }
        }
    }

    /// Flips edit mode of one text file, returning the new state.
    pub fn toggle_edit(&mut self, node: &Node) -> Option<bool> {
        self.entry_mut(node).map(ContentEntry::toggle_editing)
    }

    /// Drops buffers and expand flags for `ids`. Returns how many buffers went.
    pub fn forget(&mut self, ids: &[NodeId]) -> usize {
        let mut dropped = 0;
        for id in ids {
            if self.contents.remove(id).is_some() {
                dropped += 1;
            }
            self.expanded.remove(id);
        }
        dropped
    }

    /// Ids holding a buffer or expand flag but no longer present in `tree`.
    pub fn stale_ids(&self, tree: &FileTree) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .contents
            .keys()
            .chain(self.expanded.iter())
            .copied()
            .filter(|id| !tree.contains(*id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    fn entry_mut(&mut self, node: &Node) -> Option<&mut ContentEntry> {
        if !is_text_file(node) {
            return None;
        }
        self.ensure_content(node);
        self.contents.get_mut(&node.id())
    }
}

fn is_text_file(node: &Node) -> bool {
    !node.is_folder() && FileKind::from_name(node.name()).is_text()
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/selection.rs"]
mod tests;
