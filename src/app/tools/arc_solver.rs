//! Arc construction math: full-circle preview, sweep direction, sweep splitting.
//!
//! Pure functions without state. Every returned path is built from the fixed
//! anchors alone, so re-evaluating with the same inputs is idempotent.

use crate::core::{arc_angle, rotate_around, Angle, Vertex};
use glam::Vec2;

/// Sweeps larger than this (in absolute value) are split into two vertices.
pub const SPLIT_THRESHOLD: Angle = Angle::DEG270;

/// Previous sweeps beyond ±this keep their direction when the raw angle flips sign.
pub const CONTINUITY_THRESHOLD: Angle = Angle::DEG90;

/// Full circle through `cursor` around `center` as two 180° arcs.
///
/// Returns `[center, cursor (180°), mirrored cursor (180°), cursor]`. Only used
/// for the radius preview before the start point is fixed.
pub fn preview_circle(center: Vec2, cursor: Vec2) -> [Vertex; 4] {
    let mirrored = rotate_around(cursor, Angle::DEG180, center);
    [
        Vertex::new(center),
        Vertex::with_angle(cursor, Angle::DEG180),
        Vertex::with_angle(mirrored, Angle::DEG180),
        Vertex::new(cursor),
    ]
}

/// Signed sweep from `arc_start` to `cursor` around `center`.
///
/// The raw angle lies in `(-180°, 180°]`. If the previous sweep was already
/// beyond ±90° and the raw angle has the opposite sign, the cursor has
/// crossed the line through the center opposite the start point; the sweep
/// then continues in the previous direction instead of flipping.
pub fn compute_sweep(arc_start: Vec2, cursor: Vec2, center: Vec2, previous_sweep: Angle) -> Angle {
    let raw = arc_angle(arc_start, cursor, center).mapped_to_180();
    let flipped_negative = previous_sweep > CONTINUITY_THRESHOLD && raw.is_negative();
    let flipped_positive = previous_sweep < -CONTINUITY_THRESHOLD && raw.is_positive();
    if flipped_negative || flipped_positive {
        raw.inverted()
    } else {
        raw
    }
}

/// Vertices of an arc starting at `arc_start` with the given sweep.
///
/// The last vertex is the arc end (angle 0°); all vertices before it carry
/// the sweep. Sweeps with `|sweep| > 270°` are split in two halves through a
/// midpoint vertex, smaller sweeps use a single arc segment.
pub fn build_swept_vertices(arc_start: Vec2, center: Vec2, sweep: Angle) -> Vec<Vertex> {
    let end = Vertex::new(rotate_around(arc_start, sweep, center));
    if sweep.abs() > SPLIT_THRESHOLD {
        let half = sweep / 2.0;
        let mid = rotate_around(arc_start, half, center);
        vec![
            Vertex::with_angle(arc_start, sweep - half),
            Vertex::with_angle(mid, half),
            end,
        ]
    } else {
        vec![Vertex::with_angle(arc_start, sweep), end]
    }
}
