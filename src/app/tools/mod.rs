//! Drawing tools that construct symbol polygons from pointer events.
//!
//! One `DrawShapeTool` exists per `ShapeMode`; the `ToolManager` owns them
//! and tracks which one is active. Per-mode vertex rules live behind the
//! `ShapeStrategy` trait, the arc math in `arc_solver`.

/// Arc construction math (pure functions).
pub mod arc_solver;
mod construction;
mod context;
/// Interaction state machine: Idle / Constructing.
pub mod draw_shape;
mod path_builder;
mod strategy;
mod style;

pub use construction::{ArcPhase, ConstructionState};
pub use context::ToolContext;
pub use draw_shape::DrawShapeTool;
pub use path_builder::PathBuilder;
pub use strategy::{
    strategy_for, ArcStrategy, PolylineStrategy, RectangleStrategy, SegmentOutcome, ShapeStrategy,
};
pub use style::{StyleSnapshot, DEFAULT_LINE_WIDTH};

use crate::core::GraphicsLayer;
use serde::{Deserialize, Serialize};

// ── Types ────────────────────────────────────────────────────────

/// Kind of shape a tool draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeMode {
    /// Open polyline, one segment per click
    Line,
    /// Axis-aligned rectangle from two corners
    Rectangle,
    /// Polygon, one segment per click
    Polygon,
    /// Circular arc from center, start and end
    Arc,
}

/// Style attribute shown in the tool's toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttribute {
    /// Target layer
    Layer,
    /// Stroke width
    LineWidth,
    /// Segment sweep angle
    Angle,
    /// Fill flag
    Fill,
    /// Grab-area flag
    GrabArea,
}

impl ShapeMode {
    /// All modes in toolbar order.
    pub const ALL: [ShapeMode; 4] = [
        ShapeMode::Line,
        ShapeMode::Rectangle,
        ShapeMode::Polygon,
        ShapeMode::Arc,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeMode::Line => "Line",
            ShapeMode::Rectangle => "Rectangle",
            ShapeMode::Polygon => "Polygon",
            ShapeMode::Arc => "Arc",
        }
    }

    /// Undo label of every construction step.
    pub fn undo_label(self) -> &'static str {
        "Add symbol polygon"
    }

    /// Vertex count right after the first click.
    pub fn initial_vertex_count(self) -> usize {
        match self {
            ShapeMode::Line | ShapeMode::Polygon => 2,
            ShapeMode::Rectangle => 5,
            ShapeMode::Arc => 4,
        }
    }

    /// Attributes the toolbar offers for this mode.
    pub fn editable_attributes(self) -> &'static [StyleAttribute] {
        use StyleAttribute::*;
        match self {
            ShapeMode::Line => &[Layer, LineWidth, Angle],
            ShapeMode::Rectangle => &[Layer, LineWidth, Fill, GrabArea],
            ShapeMode::Polygon => &[Layer, LineWidth, Angle, Fill, GrabArea],
            ShapeMode::Arc => &[Layer, LineWidth],
        }
    }

    fn index(self) -> usize {
        match self {
            ShapeMode::Line => 0,
            ShapeMode::Rectangle => 1,
            ShapeMode::Polygon => 2,
            ShapeMode::Arc => 3,
        }
    }
}

impl std::fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── ToolManager ──────────────────────────────────────────────────

/// Owns one drawing tool per mode and the active mode.
///
/// Style defaults live in the tools, so they survive switching between modes.
#[derive(Debug)]
pub struct ToolManager {
    tools: Vec<DrawShapeTool>,
    active: Option<ShapeMode>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    /// Creates all tools with built-in style defaults.
    pub fn new() -> Self {
        Self {
            tools: ShapeMode::ALL.into_iter().map(DrawShapeTool::new).collect(),
            active: None,
        }
    }

    /// Creates all tools with layer and width defaults from the editor options.
    pub fn with_defaults(layer: GraphicsLayer, line_width: f32) -> Self {
        Self {
            tools: ShapeMode::ALL
                .into_iter()
                .map(|mode| {
                    DrawShapeTool::with_style(mode, StyleSnapshot::with_defaults(mode, layer, line_width))
                })
                .collect(),
            active: None,
        }
    }

    /// Currently active mode.
    pub fn active_mode(&self) -> Option<ShapeMode> {
        self.active
    }

    /// Tool of the given mode.
    pub fn tool(&self, mode: ShapeMode) -> &DrawShapeTool {
        &self.tools[mode.index()]
    }

    /// Mutable tool of the given mode.
    pub fn tool_mut(&mut self, mode: ShapeMode) -> &mut DrawShapeTool {
        &mut self.tools[mode.index()]
    }

    /// Active tool, if any.
    pub fn active_tool(&self) -> Option<&DrawShapeTool> {
        self.active.map(|mode| self.tool(mode))
    }

    /// Mutable active tool, if any.
    pub fn active_tool_mut(&mut self) -> Option<&mut DrawShapeTool> {
        let mode = self.active?;
        Some(self.tool_mut(mode))
    }

    /// `true` if the active tool is in the middle of a construction.
    pub fn is_constructing(&self) -> bool {
        self.active_tool()
            .is_some_and(|tool| tool.is_constructing())
    }

    /// Switches to `mode`, deactivating the previous tool first.
    pub fn set_active(&mut self, mode: ShapeMode, ctx: &mut ToolContext<'_>) -> bool {
        if self.active == Some(mode) {
            return false;
        }
        self.deactivate(ctx);
        let activated = self.tool_mut(mode).activate(ctx);
        if activated {
            self.active = Some(mode);
        }
        activated
    }

    /// Deactivates the active tool (aborting any construction).
    pub fn deactivate(&mut self, ctx: &mut ToolContext<'_>) -> bool {
        let Some(mode) = self.active.take() else {
            return false;
        };
        self.tool_mut(mode).deactivate(ctx)
    }
}
