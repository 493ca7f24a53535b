use super::{SegmentOutcome, ShapeStrategy};
use crate::app::tools::{arc_solver, ArcPhase, ConstructionState, ShapeMode, StyleSnapshot};
use crate::core::{Angle, Vertex};
use glam::Vec2;

/// Circular arc: first click fixes the center, second the start point
/// (and radius), third the sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcStrategy;

impl ShapeStrategy for ArcStrategy {
    fn mode(&self) -> ShapeMode {
        ShapeMode::Arc
    }

    fn initial_vertices(&self, pos: Vec2, _style: &StyleSnapshot) -> Vec<Vertex> {
        vec![Vertex::new(pos); 4]
    }

    fn initial_phase(&self) -> Option<ArcPhase> {
        Some(ArcPhase::PlacingStart)
    }

    fn apply_preview(&self, state: &mut ConstructionState, pos: Vec2) {
        match state.arc_phase {
            Some(ArcPhase::PlacingStart) | None => state.path.set_circle_preview(pos),
            Some(ArcPhase::PlacingSweep { previous_sweep }) => {
                let (Some(center), Some(start)) = (state.path.arc_center(), state.path.arc_start())
                else {
                    return;
                };
                let sweep = arc_solver::compute_sweep(start, pos, center, previous_sweep);
                state.path.set_arc_sweep(sweep);
                state.arc_phase = Some(ArcPhase::PlacingSweep {
                    previous_sweep: sweep,
                });
            }
        }
    }

    fn finalize_segment(&self, state: &mut ConstructionState) -> SegmentOutcome {
        // zero radius in the first phase, zero sweep in the second
        if state.path.last_segment_is_degenerate() {
            return SegmentOutcome::Degenerate;
        }
        match state.arc_phase {
            Some(ArcPhase::PlacingStart) | None => {
                state.arc_phase = Some(ArcPhase::PlacingSweep {
                    previous_sweep: Angle::DEG0,
                });
                SegmentOutcome::NextPhase
            }
            Some(ArcPhase::PlacingSweep { .. }) => {
                state.path.remove_center();
                SegmentOutcome::Commit { continues: false }
            }
        }
    }
}
