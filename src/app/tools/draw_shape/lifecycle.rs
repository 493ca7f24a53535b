//! Lifecycle and pointer events of the drawing tool.

use super::super::{ConstructionState, PathBuilder, SegmentOutcome, ToolContext};
use super::state::{Construction, DrawShapeTool};
use crate::app::transaction::{EditError, EditTransaction};
use crate::core::{snap_to_grid, Polygon, ShapeEdit};
use glam::Vec2;

impl DrawShapeTool {
    // ── Lifecycle ───────────────────────────────────────────────────

    /// Enters the tool. Publishes the current style defaults to the host.
    pub fn activate(&mut self, ctx: &mut ToolContext<'_>) -> bool {
        self.active = true;
        log::info!("{} tool activated", self.mode);
        ctx.host.style_changed(self.mode, &self.style);
        true
    }

    /// Leaves the tool, aborting an open construction.
    pub fn deactivate(&mut self, ctx: &mut ToolContext<'_>) -> bool {
        if self.construction.is_some() && !self.abort(ctx) {
            return false;
        }
        self.active = false;
        log::info!("{} tool deactivated", self.mode);
        true
    }

    // ── Pointer events ──────────────────────────────────────────────

    /// Press: starts a construction when Idle, otherwise locks in the next point.
    pub fn on_pointer_down(&mut self, ctx: &mut ToolContext<'_>, pos: Vec2) -> bool {
        if !self.active {
            return false;
        }
        let pos = snap_to_grid(pos, ctx.grid_interval);
        if self.construction.is_some() {
            self.add_next_segment(ctx, pos)
        } else {
            self.start(ctx, pos)
        }
    }

    /// Cursor moved: updates the preview while Constructing.
    pub fn on_pointer_move(&mut self, ctx: &mut ToolContext<'_>, pos: Vec2) -> bool {
        if self.construction.is_none() {
            return false;
        }
        let pos = snap_to_grid(pos, ctx.grid_interval);
        self.update_position(ctx, pos)
    }

    /// Confirm (single or double): same as a press.
    pub fn on_pointer_confirm(&mut self, ctx: &mut ToolContext<'_>, pos: Vec2) -> bool {
        self.on_pointer_down(ctx, pos)
    }

    /// Abort command: discards the open segment. Not handled while Idle.
    pub fn on_abort_command(&mut self, ctx: &mut ToolContext<'_>) -> bool {
        if self.construction.is_none() {
            return false;
        }
        self.abort(ctx)
    }

    // ── Internals ───────────────────────────────────────────────────

    fn start(&mut self, ctx: &mut ToolContext<'_>, pos: Vec2) -> bool {
        let id = ctx.symbol.next_shape_id();
        let style = self.style;
        let state = ConstructionState {
            mode: self.mode,
            path: PathBuilder::new(self.strategy.initial_vertices(pos, &style)),
            style,
            arc_phase: self.strategy.initial_phase(),
        };
        let polygon = Polygon::new(
            id,
            style.layer,
            style.line_width,
            style.filled,
            style.grab_area,
            state.path.to_path(),
        );
        match EditTransaction::begin_insert(ctx.history, ctx.symbol, self.mode.undo_label(), polygon) {
            Ok(transaction) => {
                log::debug!("{} construction started at {:?} (polygon {})", self.mode, pos, id);
                self.construction = Some(Construction { state, transaction });
                ctx.host.preview_changed(Some(id));
                true
            }
            Err(err) => {
                self.fail(ctx, err);
                false
            }
        }
    }

    pub(super) fn update_position(&mut self, ctx: &mut ToolContext<'_>, pos: Vec2) -> bool {
        let Some(c) = self.construction.as_mut() else {
            return false;
        };
        self.strategy.apply_preview(&mut c.state, pos);
        let edit = ShapeEdit::path(c.state.path.to_path());
        if let Err(err) = c.transaction.stage(ctx.history, ctx.symbol, edit) {
            self.fail(ctx, err);
            return false;
        }
        true
    }

    fn add_next_segment(&mut self, ctx: &mut ToolContext<'_>, pos: Vec2) -> bool {
        // lock in the preview for the click position first
        if !self.update_position(ctx, pos) {
            return false;
        }
        let Some(c) = self.construction.as_mut() else {
            return false;
        };
        match self.strategy.finalize_segment(&mut c.state) {
            SegmentOutcome::Degenerate => {
                log::debug!("{} segment is degenerate, construction aborted", self.mode);
                self.abort(ctx)
            }
            SegmentOutcome::NextPhase => self.update_position(ctx, pos),
            SegmentOutcome::Commit { continues } => {
                match self.commit_segment(ctx, pos, continues) {
                    Ok(()) => true,
                    Err(err) => {
                        self.fail(ctx, err);
                        false
                    }
                }
            }
        }
    }

    fn commit_segment(
        &mut self,
        ctx: &mut ToolContext<'_>,
        pos: Vec2,
        continues: bool,
    ) -> Result<(), EditError> {
        let Some(c) = self.construction.as_mut() else {
            return Ok(());
        };
        c.transaction
            .stage(ctx.history, ctx.symbol, ShapeEdit::path(c.state.path.to_path()))?;
        let shape = c.transaction.commit(ctx.history)?;
        log::info!(
            "{}: polygon {} committed with {} vertices",
            self.mode,
            shape,
            c.state.path.len()
        );

        if !continues {
            self.construction = None;
            ctx.host.preview_changed(None);
            return Ok(());
        }

        c.transaction =
            EditTransaction::begin_edit(ctx.history, ctx.symbol, self.mode.undo_label(), shape)?;
        self.strategy.begin_next_segment(&mut c.state, pos);
        c.transaction
            .stage(ctx.history, ctx.symbol, ShapeEdit::path(c.state.path.to_path()))?;
        Ok(())
    }

    /// Rolls back the open segment and returns to Idle.
    pub(super) fn abort(&mut self, ctx: &mut ToolContext<'_>) -> bool {
        let Some(mut c) = self.construction.take() else {
            return false;
        };
        ctx.host.preview_changed(None);
        if !c.transaction.is_open() {
            return true;
        }
        match c.transaction.abort(ctx.history, ctx.symbol) {
            Ok(()) => {
                log::debug!("{} construction aborted", self.mode);
                true
            }
            Err(err) => {
                log::error!("{} abort failed: {}", self.mode, err);
                ctx.host.show_error("Error", &err.to_string());
                false
            }
        }
    }

    /// Mutation failure: full rollback, error notification, back to Idle.
    pub(super) fn fail(&mut self, ctx: &mut ToolContext<'_>, err: EditError) {
        log::error!("{} construction failed ({:?}): {}", self.mode, err.kind(), err);
        if let Some(mut c) = self.construction.take() {
            if c.transaction.is_open() {
                if let Err(abort_err) = c.transaction.abort(ctx.history, ctx.symbol) {
                    log::error!("{} rollback failed: {}", self.mode, abort_err);
                }
            }
            ctx.host.preview_changed(None);
        }
        ctx.host.show_error("Error", &err.to_string());
    }
}
