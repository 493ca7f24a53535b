//! Tool-scoped style defaults ("last used" values) for new polygons.

use super::ShapeMode;
use crate::core::{Angle, GraphicsLayer};

/// Default stroke width in mm.
pub const DEFAULT_LINE_WIDTH: f32 = 0.2;

/// Style applied to the next polygon a tool creates.
///
/// Owned by one tool instance; callbacks update it and every new
/// construction starts from a copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    /// Target layer
    pub layer: GraphicsLayer,
    /// Stroke width in mm
    pub line_width: f32,
    /// Sweep of the next Line/Polygon segment
    pub angle: Angle,
    /// Interior is filled
    pub filled: bool,
    /// Interior is a grab area
    pub grab_area: bool,
}

impl StyleSnapshot {
    /// Defaults for a tool of the given mode.
    ///
    /// Outlines you can fill (rectangles, polygons) are grab areas by default.
    pub fn for_mode(mode: ShapeMode) -> Self {
        Self {
            layer: GraphicsLayer::SymbolOutlines,
            line_width: DEFAULT_LINE_WIDTH,
            angle: Angle::DEG0,
            filled: false,
            grab_area: !matches!(mode, ShapeMode::Line | ShapeMode::Arc),
        }
    }

    /// Same defaults with layer and width taken from the editor options.
    pub fn with_defaults(mode: ShapeMode, layer: GraphicsLayer, line_width: f32) -> Self {
        Self {
            layer,
            line_width,
            ..Self::for_mode(mode)
        }
    }
}
