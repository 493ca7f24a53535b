//! State of one shape construction, from the first click to commit or abort.

use super::{PathBuilder, ShapeMode, StyleSnapshot};
use crate::core::Angle;

/// Sub-phase of an arc construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcPhase {
    /// Center fixed, cursor chooses radius and start point
    PlacingStart,
    /// Start fixed, cursor chooses the sweep
    PlacingSweep {
        /// Sweep of the previous preview, used for direction continuity
        previous_sweep: Angle,
    },
}

/// Everything that belongs to the shape currently being drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionState {
    /// Shape kind
    pub mode: ShapeMode,
    /// Path under construction
    pub path: PathBuilder,
    /// Style the shape was started with (kept in sync by the style callbacks)
    pub style: StyleSnapshot,
    /// Arc sub-phase, `None` for other modes
    pub arc_phase: Option<ArcPhase>,
}

impl ConstructionState {
    /// `true` while an arc waits for its sweep.
    pub fn is_placing_sweep(&self) -> bool {
        matches!(self.arc_phase, Some(ArcPhase::PlacingSweep { .. }))
    }
}
