//! 数据模型层

pub mod content;
pub mod file_kind;
pub mod file_tree;
pub mod filter;

pub use content::{ContentEntry, EMPTY_CONTENT_TEXT};
pub use file_kind::FileKind;
pub use file_tree::{
    demo_forest, FileTree, FileTreeError, NewNodeKind, Node, NodeId, NodeKind, NodeRecord,
    RecordId,
};
pub use filter::{FilterEngine, FilterRule};
