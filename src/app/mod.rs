//! Application layer: controller, state, events and drawing tools.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
pub mod host;
mod intent_mapping;
/// Application state
///
/// Holds the edited symbol, its history and the drawing tools.
pub mod state;
pub mod tools;
pub mod transaction;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{DocumentMutation, HistoryError, UndoStack};
pub use host::{Notification, ToolHost};
pub use state::{AppState, UiState};
pub use tools::{DrawShapeTool, ShapeMode, StyleAttribute, StyleSnapshot, ToolManager};
pub use transaction::{EditError, EditTransaction, ErrorKind};
