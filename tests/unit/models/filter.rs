use super::*;
use crate::models::file_tree::{demo_forest, NodeId};

fn id(raw: u64) -> NodeId {
    NodeId::new(raw)
}

fn ids(tree: &FileTree) -> Vec<u64> {
    tree.iter().map(|n| n.id().get()).collect()
}

fn small_tree() -> FileTree {
    let treeview = Arc::new(Node::file(id(3), "Treeview.txt"));
    let components = Arc::new(Node::folder(id(2), "components", vec![treeview]));
    let app = Arc::new(Node::file(id(4), "App.txt"));
    let src = Arc::new(Node::folder(id(1), "src", vec![components, app]));
    FileTree::new(vec![src]).unwrap()
}

#[test]
fn empty_query_keeps_everything() {
    let tree = demo_forest();
    let filtered = FilterEngine::default().filter(&tree, "");
    assert_eq!(filtered, tree);
}

#[test]
fn nested_match_keeps_ancestor_chain_only() {
    let tree = small_tree();
    let filtered = FilterEngine::default().filter(&tree, "view");

    assert_eq!(ids(&filtered), vec![1, 2, 3]);
    let src = &filtered.roots()[0];
    assert_eq!(src.name(), "src");
    let components = &src.children().unwrap()[0];
    assert_eq!(components.name(), "components");
    assert_eq!(components.children().unwrap()[0].name(), "Treeview.txt");
    assert!(filtered.find(id(4)).is_none());
}

#[test]
fn match_is_case_insensitive() {
    let tree = small_tree();
    let filtered = FilterEngine::default().filter(&tree, "TREE");
    assert_eq!(ids(&filtered), vec![1, 2, 3]);
}

#[test]
fn filtered_nodes_exist_in_source_with_same_name() {
    let tree = demo_forest();
    for query in ["o", "txt", "json", "comp", "zzz"] {
        let filtered = FilterEngine::default().filter(&tree, query);
        for node in filtered.iter() {
            let original = tree.find(node.id()).unwrap();
            assert_eq!(original.name(), node.name());
            assert_eq!(original.kind(), node.kind());
        }
    }
}

#[test]
fn matching_folder_keeps_only_matching_children() {
    let tree = demo_forest();
    let filtered = FilterEngine::default().filter(&tree, "s");

    // server/src 自身匹配 "s"，子节点仍然各自过滤
    let src = filtered.find(id(5)).unwrap();
    let names: Vec<&str> = src.children().unwrap().iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["components"]);
    assert_eq!(filtered.find(id(8)).unwrap().children().unwrap().len(), 0);
    assert!(filtered.find(id(4)).is_some());
    assert!(filtered.find(id(1)).is_none());
}

#[test]
fn empty_folder_without_match_is_dropped() {
    let empty = Arc::new(Node::folder(id(2), "assets", Vec::new()));
    let readme = Arc::new(Node::file(id(3), "readme.txt"));
    let root = Arc::new(Node::folder(id(1), "docs", vec![empty, readme]));
    let tree = FileTree::new(vec![root]).unwrap();

    let filtered = FilterEngine::default().filter(&tree, "read");
    assert_eq!(ids(&filtered), vec![1, 3]);
}

#[test]
fn source_tree_is_not_mutated() {
    let tree = demo_forest();
    let before = tree.clone();
    let _ = FilterEngine::default().filter(&tree, "logo");
    assert_eq!(tree, before);
}

#[test]
fn whole_surviving_subtrees_are_shared() {
    let tree = demo_forest();
    let filtered = FilterEngine::default().filter(&tree, "o");

    // public -> logo.png 整棵命中
    assert!(Arc::ptr_eq(&tree.roots()[0], &filtered.roots()[0]));
}

#[test]
fn direct_children_rule_stops_at_one_level() {
    let tree = small_tree();
    let engine = FilterEngine::new(FilterRule::DirectChildren);
    assert_eq!(engine.rule(), FilterRule::DirectChildren);

    let filtered = engine.filter(&tree, "view");
    assert!(filtered.is_empty());

    let filtered = engine.filter(&tree, "app");
    assert_eq!(ids(&filtered), vec![1, 4]);
}

#[test]
fn default_rule_keeps_everything_direct_children_keeps() {
    assert_eq!(FilterEngine::default().rule(), FilterRule::Recursive);

    let tree = demo_forest();
    let literal = FilterEngine::new(FilterRule::DirectChildren);
    let recursive = FilterEngine::new(FilterRule::Recursive);
    for query in ["", "txt", "view", "config", "src", "o", "png", "missing"] {
        let kept = ids(&literal.filter(&tree, query));
        let wider = ids(&recursive.filter(&tree, query));
        assert!(
            kept.iter().all(|id| wider.contains(id)),
            "query {query:?}: {kept:?} not within {wider:?}"
        );
    }

    // 只有递归规则能满足祖先链保留
    assert!(literal.filter(&tree, "view").find(id(9)).is_none());
    assert_eq!(ids(&recursive.filter(&tree, "view")), vec![5, 8, 9]);
}
