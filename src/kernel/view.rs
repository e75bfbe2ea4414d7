//! Render-ready projections of the kernel state.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use std::sync::Arc;

use crate::models::{FileTree, Node, NodeId};

pub const NOTHING_SELECTED_TEXT: &str = "Select a file to view or edit";
pub const UNSUPPORTED_TEXT: &str = "Unsupported file type";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub is_folder: bool,
    pub is_expanded: bool,
}

/// Depth-first rows of `tree`, descending only into expanded folders.
/// Sibling order is kept as-is.
pub fn flatten_for_view(tree: &FileTree, expanded: &FxHashSet<NodeId>) -> Vec<FileTreeRow> {
    let mut result = Vec::new();
    let mut stack: Vec<(&Arc<Node>, u16)> = tree.roots().iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let is_expanded = node.is_folder() && expanded.contains(&node.id());
        result.push(FileTreeRow {
            id: node.id(),
            depth,
            name: CompactString::from(node.name()),
            is_folder: node.is_folder(),
            is_expanded,
        });

        if is_expanded {
            if let Some(children) = node.children() {
                for child in children.iter().rev() {
                    stack.push((child, depth.saturating_add(1)));
                }
            }
        }
    }

    result
}

/// What the content pane shows for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    NothingSelected,
    Text {
        id: NodeId,
        name: CompactString,
        text: String,
        editing: bool,
    },
    Image {
        id: NodeId,
        name: CompactString,
        asset_path: String,
    },
    Unsupported {
        id: NodeId,
        name: CompactString,
    },
}

impl ContentView {
    /// Label of the edit toggle button, text views only.
    pub fn edit_label(&self) -> Option<&'static str> {
        match self {
            ContentView::Text { editing: true, .. } => Some("Save"),
            ContentView::Text { editing: false, .. } => Some("Edit"),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ContentView::NothingSelected => Some(NOTHING_SELECTED_TEXT),
            ContentView::Unsupported { .. } => Some(UNSUPPORTED_TEXT),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/view.rs"]
mod tests;
