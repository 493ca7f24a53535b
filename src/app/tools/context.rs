use crate::app::host::ToolHost;
use crate::app::history::UndoStack;
use crate::core::Symbol;
use std::sync::Arc;

/// Everything a drawing tool may touch while handling one event.
///
/// Borrowed from `AppState` for the duration of a single call, so the tool
/// never keeps references across event boundaries.
pub struct ToolContext<'a> {
    /// Document being edited
    pub symbol: &'a mut Arc<Symbol>,
    /// Undo history of the document
    pub history: &'a mut UndoStack,
    /// Callback interface of the surrounding editor
    pub host: &'a mut dyn ToolHost,
    /// Grid interval for snapping pointer positions (mm)
    pub grid_interval: f32,
}

impl<'a> ToolContext<'a> {
    /// Bundles the borrowed parts.
    pub fn new(
        symbol: &'a mut Arc<Symbol>,
        history: &'a mut UndoStack,
        host: &'a mut dyn ToolHost,
        grid_interval: f32,
    ) -> Self {
        Self {
            symbol,
            history,
            host,
            grid_interval,
        }
    }
}
