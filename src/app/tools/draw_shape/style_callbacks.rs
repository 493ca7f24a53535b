//! Toolbar callbacks: update the defaults and the staged shape.

use super::super::ToolContext;
use super::state::DrawShapeTool;
use crate::core::{Angle, GraphicsLayer, ShapeEdit};

impl DrawShapeTool {
    /// Layer selection changed.
    pub fn on_layer_changed(&mut self, ctx: &mut ToolContext<'_>, layer: GraphicsLayer) -> bool {
        self.style.layer = layer;
        self.publish_style(ctx);
        self.restage(ctx, ShapeEdit::layer(layer))
    }

    /// Line width changed. Negative or non-finite widths are rejected.
    pub fn on_line_width_changed(&mut self, ctx: &mut ToolContext<'_>, width: f32) -> bool {
        if !width.is_finite() || width < 0.0 {
            log::warn!("{}: line width {} rejected", self.mode, width);
            ctx.host
                .show_error("Invalid line width", &format!("{width} is not a valid line width"));
            return false;
        }
        self.style.line_width = width;
        self.publish_style(ctx);
        self.restage(ctx, ShapeEdit::line_width(width))
    }

    /// Segment angle changed. Only Line and Polygon apply it to the staged path.
    pub fn on_angle_changed(&mut self, ctx: &mut ToolContext<'_>, angle: Angle) -> bool {
        self.style.angle = angle;
        self.publish_style(ctx);
        let Some(c) = self.construction.as_mut() else {
            return true;
        };
        c.state.style = self.style;
        if !self.strategy.apply_segment_angle(&mut c.state, angle) {
            return true;
        }
        let edit = ShapeEdit::path(c.state.path.to_path());
        self.restage(ctx, edit)
    }

    /// Fill flag changed.
    pub fn on_fill_changed(&mut self, ctx: &mut ToolContext<'_>, filled: bool) -> bool {
        self.style.filled = filled;
        self.publish_style(ctx);
        self.restage(ctx, ShapeEdit::filled(filled))
    }

    /// Grab-area flag changed.
    pub fn on_grab_area_changed(&mut self, ctx: &mut ToolContext<'_>, grab_area: bool) -> bool {
        self.style.grab_area = grab_area;
        self.publish_style(ctx);
        self.restage(ctx, ShapeEdit::grab_area(grab_area))
    }

    fn publish_style(&self, ctx: &mut ToolContext<'_>) {
        log::debug!("{} style: {:?}", self.mode, self.style);
        ctx.host.style_changed(self.mode, &self.style);
    }

    /// Stages `edit` on the open construction, if any.
    fn restage(&mut self, ctx: &mut ToolContext<'_>, edit: ShapeEdit) -> bool {
        let Some(c) = self.construction.as_mut() else {
            return true;
        };
        c.state.style = self.style;
        if let Err(err) = c.transaction.stage(ctx.history, ctx.symbol, edit) {
            self.fail(ctx, err);
            return false;
        }
        true
    }
}
