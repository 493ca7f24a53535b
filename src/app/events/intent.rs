use crate::app::tools::ShapeMode;
use crate::core::{Angle, GraphicsLayer};

/// Input from UI or script, without mutation logic of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Drawing tool chosen in the toolbar
    SelectToolRequested { mode: ShapeMode },
    /// Left button pressed in the viewport
    PointerPressed { world_pos: glam::Vec2 },
    /// Cursor moved in the viewport
    PointerMoved { world_pos: glam::Vec2 },
    /// Left button double-clicked in the viewport
    PointerDoubleClicked { world_pos: glam::Vec2 },
    /// Escape
    CancelRequested,
    /// Undo the last action
    UndoRequested,
    /// Redo the last undone action
    RedoRequested,
    /// Toolbar: layer changed
    LayerChanged { layer: GraphicsLayer },
    /// Toolbar: line width changed
    LineWidthChanged { width: f32 },
    /// Toolbar: segment angle changed
    AngleChanged { angle: Angle },
    /// Toolbar: fill flag toggled
    FillChanged { filled: bool },
    /// Toolbar: grab-area flag toggled
    GrabAreaChanged { grab_area: bool },
}
