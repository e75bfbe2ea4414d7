//! treepane - 可编辑文件树的无界面内核
//!
//! 模块结构：
//! - models: 数据模型（FileTree, Node, FilterEngine, ContentEntry）
//! - kernel: 应用核心（TreeStore, SelectionController, Store/Action/Effect, Settings）

pub mod kernel;
pub mod models;
