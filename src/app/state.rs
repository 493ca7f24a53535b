//! Application state: central data storage.

mod app_state;
mod ui;

pub use app_state::AppState;
pub use ui::{UiState, MAX_NOTIFICATIONS};
