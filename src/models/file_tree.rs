//! 文件树数据模型
//!
//! 树是不可变值：插入/删除只重建根到目标节点的路径，其余子树通过 `Arc` 共享。

use compact_str::{format_compact, CompactString};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// What the "add" affordance of a folder can create.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NewNodeKind {
    Txt,
    Json,
    Png,
    Folder,
}

impl NewNodeKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "txt" => Some(Self::Txt),
            "json" => Some(Self::Json),
            "png" => Some(Self::Png),
            "folder" => Some(Self::Folder),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Json => "json",
            Self::Png => "png",
            Self::Folder => "folder",
        }
    }

    pub fn node_kind(self) -> NodeKind {
        match self {
            Self::Folder => NodeKind::Folder,
            _ => NodeKind::File,
        }
    }

    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Folder => None,
            other => Some(other.as_str()),
        }
    }

    /// `NewFile<id>.<ext>` for files, `NewFolder<id>` for folders.
    pub fn default_name(self, id: NodeId) -> CompactString {
        match self.extension() {
            Some(ext) => format_compact!("NewFile{id}.{ext}"),
            None => format_compact!("NewFolder{id}"),
        }
    }
}

#[derive(Debug)]
pub enum FileTreeError {
    InvalidNodeId,
    ParentNotFolder,
    DuplicateId(NodeId),
    FileWithChildren(NodeId),
    MalformedId(CompactString),
    IdsExhausted,
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::InvalidNodeId => write!(f, "invalid node id"),
            FileTreeError::ParentNotFolder => write!(f, "target not found or not a folder"),
            FileTreeError::DuplicateId(id) => write!(f, "node id {id} appears more than once"),
            FileTreeError::FileWithChildren(id) => {
                write!(f, "file node {id} must not have children")
            }
            FileTreeError::MalformedId(raw) => write!(f, "node id {raw:?} is not a number"),
            FileTreeError::IdsExhausted => write!(f, "no node ids left to allocate"),
        }
    }
}

impl std::error::Error for FileTreeError {}

/// A file or folder. `children` is `Some` exactly for folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: CompactString,
    children: Option<Vec<Arc<Node>>>,
}

impl Node {
    pub fn file(id: NodeId, name: impl Into<CompactString>) -> Self {
        Self {
            id,
            name: name.into(),
            children: None,
        }
    }

    pub fn folder(id: NodeId, name: impl Into<CompactString>, children: Vec<Arc<Node>>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Some(children),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        if self.children.is_some() {
            NodeKind::Folder
        } else {
            NodeKind::File
        }
    }

    pub fn is_folder(&self) -> bool {
        self.children.is_some()
    }

    pub fn children(&self) -> Option<&[Arc<Node>]> {
        self.children.as_deref()
    }

    /// Same id and name, new children. Only meaningful for folders.
    pub(crate) fn with_children(&self, children: Vec<Arc<Node>>) -> Node {
        debug_assert!(self.is_folder());
        Node {
            id: self.id,
            name: self.name.clone(),
            children: Some(children),
        }
    }

    /// Ids of this node and everything beneath it, preorder.
    pub fn subtree_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut stack: Vec<&Node> = vec![self];
        while let Some(node) = stack.pop() {
            ids.push(node.id);
            if let Some(children) = &node.children {
                for child in children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        ids
    }
}

/// An ordered forest of root nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    roots: Vec<Arc<Node>>,
}

impl FileTree {
    /// Builds a forest, rejecting id collisions anywhere in it.
    pub fn new(roots: Vec<Arc<Node>>) -> Result<Self, FileTreeError> {
        let tree = Self { roots };
        let mut seen = FxHashSet::default();
        if let Some(dup) = tree.iter().map(|n| n.id).find(|id| !seen.insert(*id)) {
            return Err(FileTreeError::DuplicateId(dup));
        }
        Ok(tree)
    }

    pub(crate) fn from_roots(roots: Vec<Arc<Node>>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Arc<Node>] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Preorder walk over every node.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Node>> {
        let mut stack: Vec<&Arc<Node>> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Some(children) = &node.children {
                stack.extend(children.iter().rev());
            }
            Some(node)
        })
    }

    pub fn find(&self, id: NodeId) -> Option<&Arc<Node>> {
        self.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    pub fn max_id(&self) -> Option<NodeId> {
        self.iter().map(|n| n.id).max()
    }

    /// Appends `child` to the folder `parent`, returning the new tree.
    ///
    /// Nodes on the path from the root to `parent` are rebuilt; every other
    /// subtree is the same `Arc` as in `self`. The caller is responsible for
    /// `child` carrying ids not already present in the tree.
    pub fn insert_child(&self, parent: NodeId, child: Node) -> Result<FileTree, FileTreeError> {
        debug_assert!(!self.contains(child.id));
        let child = Arc::new(child);
        match insert_into(&self.roots, parent, &child)? {
            Some(roots) => Ok(FileTree { roots }),
            None => Err(FileTreeError::InvalidNodeId),
        }
    }

    /// Removes `id` wherever it lives, returning the new tree and the removed
    /// subtree. `None` when the id is not present.
    pub fn remove(&self, id: NodeId) -> Option<(FileTree, Arc<Node>)> {
        let (roots, removed) = remove_from(&self.roots, id)?;
        Some((FileTree { roots }, removed))
    }

    /// Like [`FileTree::remove`], but a missing id yields an unchanged copy.
    pub fn without(&self, id: NodeId) -> FileTree {
        self.remove(id)
            .map(|(tree, _)| tree)
            .unwrap_or_else(|| self.clone())
    }

    pub fn from_records(records: Vec<NodeRecord>) -> Result<FileTree, FileTreeError> {
        let roots = records
            .into_iter()
            .map(NodeRecord::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        FileTree::new(roots)
    }

    pub fn to_records(&self) -> Vec<NodeRecord> {
        self.roots.iter().map(|n| NodeRecord::from_node(n)).collect()
    }
}

fn insert_into(
    nodes: &[Arc<Node>],
    parent: NodeId,
    child: &Arc<Node>,
) -> Result<Option<Vec<Arc<Node>>>, FileTreeError> {
    for (idx, node) in nodes.iter().enumerate() {
        let replacement = if node.id == parent {
            let children = node
                .children
                .as_ref()
                .ok_or(FileTreeError::ParentNotFolder)?;
            let mut next = Vec::with_capacity(children.len() + 1);
            next.extend(children.iter().cloned());
            next.push(Arc::clone(child));
            node.with_children(next)
        } else if let Some(children) = &node.children {
            match insert_into(children, parent, child)? {
                Some(next) => node.with_children(next),
                None => continue,
            }
        } else {
            continue;
        };

        let mut rebuilt = nodes.to_vec();
        rebuilt[idx] = Arc::new(replacement);
        return Ok(Some(rebuilt));
    }
    Ok(None)
}

fn remove_from(nodes: &[Arc<Node>], id: NodeId) -> Option<(Vec<Arc<Node>>, Arc<Node>)> {
    for (idx, node) in nodes.iter().enumerate() {
        if node.id == id {
            let mut rebuilt = nodes.to_vec();
            let removed = rebuilt.remove(idx);
            return Some((rebuilt, removed));
        }
        if let Some(children) = &node.children {
            if let Some((next, removed)) = remove_from(children, id) {
                let mut rebuilt = nodes.to_vec();
                rebuilt[idx] = Arc::new(node.with_children(next));
                return Some((rebuilt, removed));
            }
        }
    }
    None
}

/// Id as it appears in a record: a JSON number, or a decimal string such as `"7"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(CompactString),
}

impl RecordId {
    pub fn to_node_id(&self) -> Result<NodeId, FileTreeError> {
        match self {
            RecordId::Number(raw) => Ok(NodeId::new(*raw)),
            RecordId::Text(raw) => raw
                .trim()
                .parse::<u64>()
                .map(NodeId::new)
                .map_err(|_| FileTreeError::MalformedId(raw.clone())),
        }
    }
}

impl From<NodeId> for RecordId {
    fn from(id: NodeId) -> Self {
        RecordId::Number(id.get())
    }
}

/// Serialized shape of a node: `{"id", "name", "type", "children"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: RecordId,
    pub name: CompactString,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeRecord>>,
}

impl NodeRecord {
    fn into_node(self) -> Result<Arc<Node>, FileTreeError> {
        let id = self.id.to_node_id()?;
        let node = match self.kind {
            NodeKind::File => {
                if self.children.as_ref().is_some_and(|c| !c.is_empty()) {
                    return Err(FileTreeError::FileWithChildren(id));
                }
                Node::file(id, self.name)
            }
            NodeKind::Folder => {
                let children = self
                    .children
                    .unwrap_or_default()
                    .into_iter()
                    .map(NodeRecord::into_node)
                    .collect::<Result<Vec<_>, _>>()?;
                Node::folder(id, self.name, children)
            }
        };
        Ok(Arc::new(node))
    }

    fn from_node(node: &Node) -> Self {
        Self {
            id: node.id.into(),
            name: node.name.clone(),
            kind: node.kind(),
            children: node
                .children
                .as_ref()
                .map(|c| c.iter().map(|n| NodeRecord::from_node(n)).collect()),
        }
    }
}

/// The sample workspace shown when no forest is supplied.
pub fn demo_forest() -> FileTree {
    fn file(id: u64, name: &str) -> Arc<Node> {
        Arc::new(Node::file(NodeId::new(id), name))
    }
    fn folder(id: u64, name: &str, children: Vec<Arc<Node>>) -> Arc<Node> {
        Arc::new(Node::folder(NodeId::new(id), name, children))
    }

    FileTree::from_roots(vec![
        folder(1, "public", vec![file(2, "logo.png")]),
        folder(3, "server", vec![file(4, "config.json")]),
        folder(
            5,
            "src",
            vec![
                file(6, "App.txt"),
                file(7, "File2.txt"),
                folder(8, "components", vec![file(9, "Treeview.txt")]),
            ],
        ),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
