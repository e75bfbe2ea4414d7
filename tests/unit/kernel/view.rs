use super::*;
use crate::models::demo_forest;

fn expanded(ids: &[u64]) -> FxHashSet<NodeId> {
    ids.iter().copied().map(NodeId::new).collect()
}

fn names(rows: &[FileTreeRow]) -> Vec<(u16, &str)> {
    rows.iter().map(|r| (r.depth, r.name.as_str())).collect()
}

#[test]
fn collapsed_forest_shows_roots_only() {
    let rows = flatten_for_view(&demo_forest(), &FxHashSet::default());
    assert_eq!(
        names(&rows),
        vec![(0, "public"), (0, "server"), (0, "src")]
    );
    assert!(rows.iter().all(|r| r.is_folder && !r.is_expanded));
}

#[test]
fn expanded_folders_keep_source_order() {
    let rows = flatten_for_view(&demo_forest(), &expanded(&[5, 8]));
    assert_eq!(
        names(&rows),
        vec![
            (0, "public"),
            (0, "server"),
            (0, "src"),
            (1, "App.txt"),
            (1, "File2.txt"),
            (1, "components"),
            (2, "Treeview.txt"),
        ]
    );
    assert!(rows[2].is_expanded);
    assert!(!rows[3].is_folder);
}

#[test]
fn nested_expand_flag_hidden_under_collapsed_parent() {
    let rows = flatten_for_view(&demo_forest(), &expanded(&[8]));
    assert_eq!(rows.len(), 3);
}

#[test]
fn edit_label_and_placeholders() {
    let text = ContentView::Text {
        id: NodeId::new(6),
        name: "App.txt".into(),
        text: String::new(),
        editing: false,
    };
    assert_eq!(text.edit_label(), Some("Edit"));
    assert_eq!(text.placeholder(), None);

    let editing = ContentView::Text {
        id: NodeId::new(6),
        name: "App.txt".into(),
        text: String::new(),
        editing: true,
    };
    assert_eq!(editing.edit_label(), Some("Save"));

    assert_eq!(
        ContentView::NothingSelected.placeholder(),
        Some(NOTHING_SELECTED_TEXT)
    );
    let unsupported = ContentView::Unsupported {
        id: NodeId::new(1),
        name: "a.bin".into(),
    };
    assert_eq!(unsupported.placeholder(), Some(UNSUPPORTED_TEXT));
    assert_eq!(unsupported.edit_label(), None);
}
