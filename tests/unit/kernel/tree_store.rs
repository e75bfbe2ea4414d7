use super::*;
use crate::models::{demo_forest, NodeKind};

#[test]
fn ids_continue_after_initial_forest() {
    let mut store = TreeStore::new(demo_forest());
    let a = store.insert(NodeId::new(5), NewNodeKind::Txt).unwrap();
    let b = store.insert(NodeId::new(5), NewNodeKind::Folder).unwrap();

    assert_eq!(a, NodeId::new(10));
    assert_eq!(b, NodeId::new(11));
    assert_eq!(store.find(a).unwrap().name(), "NewFile10.txt");
    assert_eq!(store.find(b).unwrap().name(), "NewFolder11");
    assert_eq!(store.find(b).unwrap().kind(), NodeKind::Folder);
    assert_eq!(store.find(b).unwrap().children().map(|c| c.len()), Some(0));
}

#[test]
fn empty_store_starts_at_one() {
    let store = TreeStore::new(FileTree::default());
    assert!(store.tree().is_empty());
    assert!(store.find(NodeId::new(1)).is_none());
}

#[test]
fn failed_insert_keeps_snapshot_and_counter() {
    let mut store = TreeStore::new(demo_forest());
    let before = store.snapshot();

    assert!(matches!(
        store.insert(NodeId::new(2), NewNodeKind::Json),
        Err(FileTreeError::ParentNotFolder)
    ));
    assert!(matches!(
        store.insert(NodeId::new(77), NewNodeKind::Json),
        Err(FileTreeError::InvalidNodeId)
    ));
    assert_eq!(store.tree(), &before);

    let id = store.insert(NodeId::new(1), NewNodeKind::Png).unwrap();
    assert_eq!(id, NodeId::new(10));
}

#[test]
fn deleted_ids_are_never_reused() {
    let mut store = TreeStore::new(demo_forest());
    let first = store.insert(NodeId::new(3), NewNodeKind::Txt).unwrap();
    assert!(store.delete(first).is_some());

    let second = store.insert(NodeId::new(3), NewNodeKind::Txt).unwrap();
    assert_ne!(first, second);
}

#[test]
fn delete_is_idempotent() {
    let mut store = TreeStore::new(demo_forest());
    assert!(store.delete(NodeId::new(8)).is_some());
    let once = store.snapshot();

    assert!(store.delete(NodeId::new(8)).is_none());
    assert_eq!(store.tree(), &once);
}

#[test]
fn snapshot_is_unaffected_by_later_mutation() {
    let mut store = TreeStore::new(demo_forest());
    let before = store.snapshot();
    store.insert(NodeId::new(8), NewNodeKind::Txt).unwrap();
    store.delete(NodeId::new(1));

    assert_eq!(before, demo_forest());
    assert_ne!(store.tree(), &before);
}

#[test]
fn loaded_max_id_exhausts_counter_without_panicking() {
    let tree = FileTree::new(vec![
        Arc::new(Node::folder(NodeId::new(u64::MAX), "top", Vec::new())),
        Arc::new(Node::folder(NodeId::new(0), "zero", Vec::new())),
    ])
    .unwrap();
    let mut store = TreeStore::new(tree);
    let before = store.snapshot();

    assert!(matches!(
        store.insert(NodeId::new(0), NewNodeKind::Txt),
        Err(FileTreeError::IdsExhausted)
    ));
    assert!(matches!(
        store.insert(NodeId::new(u64::MAX), NewNodeKind::Folder),
        Err(FileTreeError::IdsExhausted)
    ));
    assert_eq!(store.tree(), &before);
    assert_eq!(store.tree().len(), 2);
}

#[test]
fn last_id_is_handed_out_once() {
    let tree = FileTree::new(vec![Arc::new(Node::folder(
        NodeId::new(u64::MAX - 1),
        "almost",
        Vec::new(),
    ))])
    .unwrap();
    let mut store = TreeStore::new(tree);

    let last = store
        .insert(NodeId::new(u64::MAX - 1), NewNodeKind::Json)
        .unwrap();
    assert_eq!(last, NodeId::new(u64::MAX));

    let after_last = store.snapshot();
    assert!(matches!(
        store.insert(NodeId::new(u64::MAX - 1), NewNodeKind::Json),
        Err(FileTreeError::IdsExhausted)
    ));
    assert_eq!(store.tree(), &after_last);
}
