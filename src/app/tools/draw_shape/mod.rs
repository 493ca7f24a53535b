//! Drawing tool for lines, rectangles, polygons and arcs.
//!
//! States: Idle (no construction) and Constructing (one open
//! `EditTransaction`). A press or confirm while Idle starts a construction,
//! while Constructing it locks in the next point. Every committed segment
//! is its own undo entry; aborting only discards the open segment.

mod lifecycle;
mod state;
mod style_callbacks;

pub use state::DrawShapeTool;
