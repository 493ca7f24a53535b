use super::{SegmentOutcome, ShapeStrategy};
use crate::app::tools::{ConstructionState, ShapeMode, StyleSnapshot};
use crate::core::{Angle, Vertex};
use glam::Vec2;

/// Line and Polygon: a growing vertex list with one free trailing vertex.
#[derive(Debug, Clone, Copy)]
pub struct PolylineStrategy {
    mode: ShapeMode,
}

impl PolylineStrategy {
    /// Strategy for `ShapeMode::Line` or `ShapeMode::Polygon`.
    pub fn new(mode: ShapeMode) -> Self {
        debug_assert!(matches!(mode, ShapeMode::Line | ShapeMode::Polygon));
        Self { mode }
    }
}

impl ShapeStrategy for PolylineStrategy {
    fn mode(&self) -> ShapeMode {
        self.mode
    }

    fn initial_vertices(&self, pos: Vec2, style: &StyleSnapshot) -> Vec<Vertex> {
        vec![Vertex::with_angle(pos, style.angle), Vertex::new(pos)]
    }

    fn apply_preview(&self, state: &mut ConstructionState, pos: Vec2) {
        state.path.move_last(pos);
    }

    fn finalize_segment(&self, state: &mut ConstructionState) -> SegmentOutcome {
        if state.path.last_segment_is_degenerate() {
            SegmentOutcome::Degenerate
        } else {
            SegmentOutcome::Commit { continues: true }
        }
    }

    fn begin_next_segment(&self, state: &mut ConstructionState, pos: Vec2) {
        state.path.append_segment(pos, state.style.angle);
    }

    fn apply_segment_angle(&self, state: &mut ConstructionState, angle: Angle) -> bool {
        state.path.set_segment_angle(angle)
    }
}
