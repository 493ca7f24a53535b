//! Handlers for the drawing tools (activation, pointer events, toolbar).

use crate::app::tools::{DrawShapeTool, ShapeMode, ToolContext};
use crate::app::AppState;
use crate::core::{Angle, GraphicsLayer};

/// Runs `f` on the active tool. Returns `false` if no tool is active.
fn with_active_tool(
    state: &mut AppState,
    f: impl FnOnce(&mut DrawShapeTool, &mut ToolContext<'_>) -> bool,
) -> bool {
    let (tools, mut ctx) = state.tools_and_context();
    match tools.active_tool_mut() {
        Some(tool) => f(tool, &mut ctx),
        None => {
            log::debug!("No drawing tool active, event ignored");
            false
        }
    }
}

/// Activates the tool of `mode` (deactivates the previous one).
pub fn activate(state: &mut AppState, mode: ShapeMode) -> bool {
    let (tools, mut ctx) = state.tools_and_context();
    tools.set_active(mode, &mut ctx)
}

/// Leaves the active tool, aborting its construction.
pub fn deactivate(state: &mut AppState) -> bool {
    let (tools, mut ctx) = state.tools_and_context();
    tools.deactivate(&mut ctx)
}

/// Press in the viewport.
pub fn pointer_down(state: &mut AppState, world_pos: glam::Vec2) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_pointer_down(ctx, world_pos))
}

/// Cursor movement in the viewport.
pub fn pointer_move(state: &mut AppState, world_pos: glam::Vec2) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_pointer_move(ctx, world_pos))
}

/// Confirm (single or double click).
pub fn pointer_confirm(state: &mut AppState, world_pos: glam::Vec2) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_pointer_confirm(ctx, world_pos))
}

/// Aborts the open construction.
pub fn abort(state: &mut AppState) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_abort_command(ctx))
}

/// Toolbar: layer.
pub fn set_layer(state: &mut AppState, layer: GraphicsLayer) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_layer_changed(ctx, layer))
}

/// Toolbar: line width.
pub fn set_line_width(state: &mut AppState, width: f32) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_line_width_changed(ctx, width))
}

/// Toolbar: segment angle.
pub fn set_angle(state: &mut AppState, angle: Angle) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_angle_changed(ctx, angle))
}

/// Toolbar: fill flag.
pub fn set_fill(state: &mut AppState, filled: bool) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_fill_changed(ctx, filled))
}

/// Toolbar: grab-area flag.
pub fn set_grab_area(state: &mut AppState, grab_area: bool) -> bool {
    with_active_tool(state, |tool, ctx| tool.on_grab_area_changed(ctx, grab_area))
}
