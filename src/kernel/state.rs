use crate::kernel::selection::SelectionController;
use crate::kernel::settings::Settings;
use crate::kernel::tree_store::TreeStore;
use crate::models::{FileTree, FilterEngine};

#[derive(Debug, Clone)]
pub struct AppState {
    pub tree: TreeStore,
    pub selection: SelectionController,
    pub filter: FilterEngine,
    /// Current filter text; never written into the tree.
    pub filter_query: String,
    pub settings: Settings,
}

impl AppState {
    pub fn new(tree: FileTree, settings: Settings) -> Self {
        Self {
            tree: TreeStore::new(tree),
            selection: SelectionController::new(settings.placeholder_prefix.as_str()),
            filter: FilterEngine::new(settings.filter_rule),
            filter_query: String::new(),
            settings,
        }
    }
}
