use crate::app::history::UndoStack;
use crate::app::tools::{ToolContext, ToolManager};
use crate::app::CommandLog;
use crate::core::Symbol;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::UiState;

/// Main application state
pub struct AppState {
    /// Symbol being edited (Arc for O(1) undo snapshots)
    pub symbol: Arc<Symbol>,
    /// Undo/redo history (snapshot based)
    pub history: UndoStack,
    /// Drawing tools, one per shape mode
    pub tools: ToolManager,
    /// UI state (notifications, highlighted preview)
    pub ui: UiState,
    /// Log of executed commands
    pub command_log: CommandLog,
    /// Runtime options
    pub options: EditorOptions,
}

impl AppState {
    /// Creates an empty state with default options.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Creates an empty state configured from `options`.
    pub fn with_options(options: EditorOptions) -> Self {
        Self::with_symbol(Symbol::new("Untitled"), options)
    }

    /// Creates a state editing an existing symbol.
    pub fn with_symbol(symbol: Symbol, options: EditorOptions) -> Self {
        Self {
            symbol: Arc::new(symbol),
            history: UndoStack::new_with_capacity(options.history_depth),
            tools: ToolManager::with_defaults(options.default_layer, options.default_line_width),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Splits the state into the tool manager and the context its tools operate on.
    pub fn tools_and_context(&mut self) -> (&mut ToolManager, ToolContext<'_>) {
        let ctx = ToolContext::new(
            &mut self.symbol,
            &mut self.history,
            &mut self.ui,
            self.options.grid_interval,
        );
        (&mut self.tools, ctx)
    }

    /// Number of polygons (for UI display)
    pub fn polygon_count(&self) -> usize {
        self.symbol.polygon_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
