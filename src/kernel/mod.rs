//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod selection;
pub mod settings;
pub mod state;
pub mod store;
pub mod tree_store;
pub mod view;

pub use action::Action;
pub use effect::Effect;
pub use selection::SelectionController;
pub use settings::{load_settings, load_settings_or_default, Settings, SettingsError};
pub use state::AppState;
pub use store::{DispatchResult, Store};
pub use tree_store::TreeStore;
pub use view::{flatten_for_view, ContentView, FileTreeRow};
