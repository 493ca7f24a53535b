//! Per-mode construction behaviour.
//!
//! Split into:
//! - `polyline`: Line and Polygon (one free trailing vertex)
//! - `rectangle`: closed 5-vertex loop spanned from an anchor
//! - `arc`: center, start and sweep in two phases

mod arc;
mod polyline;
mod rectangle;

pub use arc::ArcStrategy;
pub use polyline::PolylineStrategy;
pub use rectangle::RectangleStrategy;

use super::{ArcPhase, ConstructionState, ShapeMode, StyleSnapshot};
use crate::core::{Angle, Vertex};
use glam::Vec2;

/// Result of locking in the current segment on a next-point event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// Zero-length segment or empty rectangle: the construction is aborted
    Degenerate,
    /// Arc switched from placing the start point to placing the sweep
    NextPhase,
    /// The staged path is final for this segment and gets committed
    Commit {
        /// `true` if a new segment is appended after the commit
        continues: bool,
    },
}

/// Construction rules of one shape mode.
///
/// Selected once per tool by [`strategy_for`].
pub trait ShapeStrategy: std::fmt::Debug {
    /// Mode this strategy builds.
    fn mode(&self) -> ShapeMode;

    /// Degenerate starting path at the (snapped) click position.
    fn initial_vertices(&self, pos: Vec2, style: &StyleSnapshot) -> Vec<Vertex>;

    /// Arc sub-phase a fresh construction starts in.
    fn initial_phase(&self) -> Option<ArcPhase> {
        None
    }

    /// Updates the free vertices for a new cursor position.
    fn apply_preview(&self, state: &mut ConstructionState, pos: Vec2);

    /// Checks and finalizes the segment after the preview was updated to the
    /// click position.
    fn finalize_segment(&self, state: &mut ConstructionState) -> SegmentOutcome;

    /// Seeds the next segment after a commit that continues.
    fn begin_next_segment(&self, _state: &mut ConstructionState, _pos: Vec2) {}

    /// Applies a changed segment angle to the staged path.
    ///
    /// Returns `true` if the path changed and must be re-staged.
    fn apply_segment_angle(&self, _state: &mut ConstructionState, _angle: Angle) -> bool {
        false
    }
}

/// Strategy for the given mode.
pub fn strategy_for(mode: ShapeMode) -> Box<dyn ShapeStrategy> {
    match mode {
        ShapeMode::Line | ShapeMode::Polygon => Box::new(PolylineStrategy::new(mode)),
        ShapeMode::Rectangle => Box::new(RectangleStrategy),
        ShapeMode::Arc => Box::new(ArcStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::PathBuilder;

    fn start(mode: ShapeMode, pos: Vec2) -> (Box<dyn ShapeStrategy>, ConstructionState) {
        let strategy = strategy_for(mode);
        let style = StyleSnapshot::for_mode(mode);
        let state = ConstructionState {
            mode,
            path: PathBuilder::new(strategy.initial_vertices(pos, &style)),
            style,
            arc_phase: strategy.initial_phase(),
        };
        (strategy, state)
    }

    #[test]
    fn initial_vertex_counts_match_mode() {
        for mode in ShapeMode::ALL {
            let (strategy, state) = start(mode, Vec2::new(2.54, 5.08));
            assert_eq!(strategy.mode(), mode);
            assert_eq!(state.path.len(), mode.initial_vertex_count(), "{mode:?}");
            assert!(state
                .path
                .vertices()
                .iter()
                .all(|v| v.pos == Vec2::new(2.54, 5.08)));
        }
    }

    #[test]
    fn polyline_continues_after_commit() {
        let (strategy, mut state) = start(ShapeMode::Polygon, Vec2::ZERO);
        strategy.apply_preview(&mut state, Vec2::new(10.0, 0.0));
        assert_eq!(
            strategy.finalize_segment(&mut state),
            SegmentOutcome::Commit { continues: true }
        );
        strategy.begin_next_segment(&mut state, Vec2::new(10.0, 0.0));
        assert_eq!(state.path.len(), 3);
    }

    #[test]
    fn polyline_zero_length_is_degenerate() {
        let (strategy, mut state) = start(ShapeMode::Line, Vec2::ZERO);
        strategy.apply_preview(&mut state, Vec2::ZERO);
        assert_eq!(
            strategy.finalize_segment(&mut state),
            SegmentOutcome::Degenerate
        );
    }

    #[test]
    fn rectangle_needs_width_and_height() {
        let (strategy, mut state) = start(ShapeMode::Rectangle, Vec2::ZERO);
        strategy.apply_preview(&mut state, Vec2::new(10.0, 0.0));
        assert_eq!(
            strategy.finalize_segment(&mut state),
            SegmentOutcome::Degenerate
        );

        strategy.apply_preview(&mut state, Vec2::new(10.0, 5.0));
        assert_eq!(
            strategy.finalize_segment(&mut state),
            SegmentOutcome::Commit { continues: false }
        );
    }

    #[test]
    fn arc_runs_through_both_phases() {
        let (strategy, mut state) = start(ShapeMode::Arc, Vec2::ZERO);
        assert_eq!(state.arc_phase, Some(ArcPhase::PlacingStart));

        strategy.apply_preview(&mut state, Vec2::new(10.0, 0.0));
        assert_eq!(
            strategy.finalize_segment(&mut state),
            SegmentOutcome::NextPhase
        );
        assert!(state.is_placing_sweep());

        strategy.apply_preview(&mut state, Vec2::new(0.0, 10.0));
        assert_eq!(
            strategy.finalize_segment(&mut state),
            SegmentOutcome::Commit { continues: false }
        );
        assert_eq!(state.path.len(), 2);
        assert_eq!(state.path.vertices()[0].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn arc_with_zero_radius_is_degenerate() {
        let (strategy, mut state) = start(ShapeMode::Arc, Vec2::new(5.0, 5.0));
        strategy.apply_preview(&mut state, Vec2::new(5.0, 5.0));
        assert_eq!(
            strategy.finalize_segment(&mut state),
            SegmentOutcome::Degenerate
        );
    }

    #[test]
    fn segment_angle_only_applies_to_polylines() {
        let (poly, mut poly_state) = start(ShapeMode::Polygon, Vec2::ZERO);
        assert!(poly.apply_segment_angle(&mut poly_state, Angle::DEG90));
        assert_eq!(poly_state.path.vertices()[0].angle, Angle::DEG90);

        let (rect, mut rect_state) = start(ShapeMode::Rectangle, Vec2::ZERO);
        assert!(!rect.apply_segment_angle(&mut rect_state, Angle::DEG90));
        assert!(rect_state.path.vertices().iter().all(|v| v.angle.is_zero()));
    }
}
