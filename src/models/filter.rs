//! 文件树过滤：大小写不敏感的子串匹配，保留命中节点的祖先链

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::file_tree::{FileTree, Node};

/// How a folder that does not match by name decides whether to stay visible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRule {
    /// Stays if anything beneath it, at any depth, survives.
    #[default]
    Recursive,
    /// Stays only if one of its direct children matches by name. Deeper
    /// matches do not hold a folder up, so with `src/components/Treeview.txt`
    /// the query `view` drops `src` along with everything under it.
    DirectChildren,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FilterEngine {
    rule: FilterRule,
}

impl FilterEngine {
    pub fn new(rule: FilterRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> FilterRule {
        self.rule
    }

    /// Derives the visible subset of `tree`. The source tree is untouched and
    /// subtrees that survive whole are shared with it.
    pub fn filter(&self, tree: &FileTree, query: &str) -> FileTree {
        if query.is_empty() {
            return tree.clone();
        }
        let needle = query.to_lowercase();
        FileTree::from_roots(self.filter_nodes(tree.roots(), &needle))
    }

    fn filter_nodes(&self, nodes: &[Arc<Node>], needle: &str) -> Vec<Arc<Node>> {
        let mut out = Vec::new();
        for node in nodes {
            let self_matches = name_matches(node.name(), needle);
            let Some(children) = node.children() else {
                if self_matches {
                    out.push(Arc::clone(node));
                }
                continue;
            };

            let kept = self.filter_nodes(children, needle);
            let include = self_matches
                || match self.rule {
                    FilterRule::Recursive => !kept.is_empty(),
                    FilterRule::DirectChildren => {
                        children.iter().any(|c| name_matches(c.name(), needle))
                    }
                };
            if !include {
                continue;
            }

            let unchanged = kept.len() == children.len()
                && kept.iter().zip(children).all(|(a, b)| Arc::ptr_eq(a, b));
            if unchanged {
                out.push(Arc::clone(node));
            } else {
                out.push(Arc::new(node.with_children(kept)));
            }
        }
        out
    }
}

/// `needle` must already be lowercased.
fn name_matches(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

#[cfg(test)]
#[path = "../../tests/unit/models/filter.rs"]
mod tests;
