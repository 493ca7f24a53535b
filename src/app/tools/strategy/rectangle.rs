use super::{SegmentOutcome, ShapeStrategy};
use crate::app::tools::{ConstructionState, ShapeMode, StyleSnapshot};
use crate::core::Vertex;
use glam::Vec2;

/// Axis-aligned rectangle spanned from the first click.
///
/// Edges are always straight; the style angle is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleStrategy;

impl ShapeStrategy for RectangleStrategy {
    fn mode(&self) -> ShapeMode {
        ShapeMode::Rectangle
    }

    fn initial_vertices(&self, pos: Vec2, _style: &StyleSnapshot) -> Vec<Vertex> {
        vec![Vertex::new(pos); 5]
    }

    fn apply_preview(&self, state: &mut ConstructionState, pos: Vec2) {
        state.path.stretch_rectangle(pos);
    }

    fn finalize_segment(&self, state: &mut ConstructionState) -> SegmentOutcome {
        let size = state.path.rectangle_size();
        if size.x == 0.0 || size.y == 0.0 {
            SegmentOutcome::Degenerate
        } else {
            SegmentOutcome::Commit { continues: false }
        }
    }
}
