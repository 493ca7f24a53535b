use crate::app::tools::ShapeMode;
use crate::core::{Angle, GraphicsLayer};

/// Mutating steps, executed centrally by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Activate the drawing tool of a mode
    ActivateTool { mode: ShapeMode },
    /// Leave the active drawing tool
    DeactivateTool,
    /// Press: start a shape or lock in the next point
    PointerDown { world_pos: glam::Vec2 },
    /// Update the construction preview
    PointerMove { world_pos: glam::Vec2 },
    /// Confirm the next point (single or double click)
    PointerConfirm { world_pos: glam::Vec2 },
    /// Discard the open segment
    AbortConstruction,
    /// Undo the last action
    Undo,
    /// Redo the last undone action
    Redo,
    /// Set the layer of the active tool
    SetLayer { layer: GraphicsLayer },
    /// Set the line width of the active tool
    SetLineWidth { width: f32 },
    /// Set the segment angle of the active tool
    SetAngle { angle: Angle },
    /// Set the fill flag of the active tool
    SetFill { filled: bool },
    /// Set the grab-area flag of the active tool
    SetGrabArea { grab_area: bool },
}
