//! Core domain types: angles, vertex paths, polygons and the symbol document.

pub mod angle;
/// Grid snapping, exact rotation and arc angles
pub mod geometry;
pub mod layer;
pub mod path;
pub mod polygon;
/// Symbol document
///
/// Holds the polygons in insertion order and enforces
/// write protection and per-polygon invariants on every mutation.
pub mod symbol;

pub use angle::Angle;
pub use geometry::{arc_angle, rotate_around, snap_to_grid};
pub use layer::GraphicsLayer;
pub use path::{Path, Vertex};
pub use polygon::{Polygon, ShapeEdit, ShapeId};
pub use symbol::{DocumentError, Symbol};
