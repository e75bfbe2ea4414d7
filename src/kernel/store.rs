use compact_str::CompactString;
use std::sync::Arc;

use super::view::{flatten_for_view, ContentView, FileTreeRow};
use super::{Action, AppState, Effect};
use crate::models::{FileKind, FileTree, NewNodeKind, Node, NodeId};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

/// Single-threaded kernel: every [`Action`] is applied to completion before
/// the next one, and the tree snapshot is swapped in one step.
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ClickNode { id } => self.click_node(id),
            Action::SetExpanded { id, expanded } => {
                let is_folder = self.node(id).is_some_and(|n| n.is_folder());
                DispatchResult::changed(
                    is_folder && self.state.selection.set_expanded(id, expanded),
                )
            }
            Action::AddNode { parent, kind } => self.add_node(parent, kind),
            Action::DeleteNode { id } => self.delete_node(id),
            Action::FilterChange { query } => {
                if self.state.filter_query == query {
                    return DispatchResult::unchanged();
                }
                self.state.filter_query = query;
                DispatchResult::changed(true)
            }
            Action::ToggleEdit { id } => {
                let Some(node) = self.node(id) else {
                    return DispatchResult::unchanged();
                };
                DispatchResult::changed(self.state.selection.toggle_edit(&node).is_some())
            }
            Action::SetContent { id, text } => {
                let Some(node) = self.node(id) else {
                    return DispatchResult::unchanged();
                };
                DispatchResult::changed(self.state.selection.set_content(&node, text))
            }
            Action::PruneStale => {
                let stale = self.state.selection.stale_ids(self.state.tree.tree());
                let dropped = self.state.selection.forget(&stale);
                if !stale.is_empty() {
                    tracing::debug!(ids = stale.len(), buffers = dropped, "pruned stale view state");
                }
                DispatchResult::changed(!stale.is_empty())
            }
        }
    }

    fn node(&self, id: NodeId) -> Option<Arc<Node>> {
        self.state.tree.find(id).cloned()
    }

    fn click_node(&mut self, id: NodeId) -> DispatchResult {
        let Some(node) = self.node(id) else {
            tracing::debug!(id = %id, "click on missing node ignored");
            return DispatchResult::unchanged();
        };

        let mut state_changed = self.state.selection.select(&node);
        if !node.is_folder() {
            // 首次查看文本文件时初始化内容
            state_changed |= self.state.selection.ensure_content(&node);
        }
        DispatchResult::changed(state_changed)
    }

    fn add_node(&mut self, parent: NodeId, kind: NewNodeKind) -> DispatchResult {
        match self.state.tree.insert(parent, kind) {
            Ok(id) => DispatchResult {
                effects: vec![Effect::NodeCreated { id, parent }],
                state_changed: true,
            },
            Err(error) => {
                tracing::debug!(parent = %parent, error = %error, "add node ignored");
                DispatchResult::unchanged()
            }
        }
    }

    fn delete_node(&mut self, id: NodeId) -> DispatchResult {
        let Some(removed) = self.state.tree.delete(id) else {
            tracing::debug!(id = %id, "delete of missing node ignored");
            return DispatchResult::unchanged();
        };

        let mut effects = vec![Effect::NodeDeleted { id }];
        let removed_ids = removed.subtree_ids();
        let selection_gone = self
            .state
            .selection
            .active()
            .is_some_and(|active| removed_ids.contains(&active));
        if selection_gone && self.state.selection.clear_selection() {
            effects.push(Effect::SelectionCleared);
        }

        if self.state.settings.prune_content_on_delete {
            let dropped = self.state.selection.forget(&removed_ids);
            tracing::debug!(id = %id, nodes = removed_ids.len(), buffers = dropped, "pruned deleted subtree");
        }

        DispatchResult {
            effects,
            state_changed: true,
        }
    }

    /// The tree as it should be rendered under the current filter.
    pub fn visible_tree(&self) -> FileTree {
        self.state
            .filter
            .filter(self.state.tree.tree(), &self.state.filter_query)
    }

    pub fn rows(&self) -> Vec<FileTreeRow> {
        flatten_for_view(&self.visible_tree(), self.state.selection.expanded())
    }

    /// Content pane for the active node. A selection that no longer resolves
    /// in the tree renders as nothing selected.
    pub fn content_view(&self) -> ContentView {
        let Some(node) = self.state.selection.active().and_then(|id| self.state.tree.find(id))
        else {
            return ContentView::NothingSelected;
        };

        let id = node.id();
        let name = CompactString::from(node.name());
        match FileKind::from_name(node.name()) {
            FileKind::Text => {
                let entry = self.state.selection.entry(id);
                ContentView::Text {
                    id,
                    name,
                    text: entry
                        .map(|e| e.display_text().to_string())
                        .unwrap_or_else(|| self.state.selection.placeholder(node)),
                    editing: entry.is_some_and(|e| e.is_editing()),
                }
            }
            FileKind::Image => ContentView::Image {
                id,
                name,
                asset_path: format!("{}{}", self.state.settings.asset_root, node.name()),
            },
            FileKind::Unsupported => ContentView::Unsupported { id, name },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
