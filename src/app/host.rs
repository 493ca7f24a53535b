//! Narrow callback interface from the drawing tools back to the editor.

use crate::app::tools::{ShapeMode, StyleSnapshot};
use crate::core::ShapeId;

/// Calls a tool makes into its host.
pub trait ToolHost {
    /// Shows a user-visible error (e.g. a rejected document mutation).
    fn show_error(&mut self, title: &str, message: &str);

    /// The style defaults of the tool for `mode` changed.
    fn style_changed(&mut self, mode: ShapeMode, style: &StyleSnapshot);

    /// The shape under construction changed (`None` once construction ends).
    fn preview_changed(&mut self, shape: Option<ShapeId>);
}

/// Error notification kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Full message
    pub message: String,
}
