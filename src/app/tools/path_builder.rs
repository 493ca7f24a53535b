//! Per-mode vertex update rules for the path under construction.
//!
//! All positions passed in are already snapped to the grid.

use super::arc_solver;
use crate::core::{Angle, Path, Vertex};
use glam::Vec2;

/// Mutable path under construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathBuilder {
    vertices: Vec<Vertex>,
}

impl PathBuilder {
    /// Starts from the initial vertices of a construction.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Current vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Copy of the current path, ready to be staged.
    pub fn to_path(&self) -> Path {
        Path::new(self.vertices.clone())
    }

    // ── Line / Polygon ──────────────────────────────────────────────

    /// Moves the free (last) vertex.
    pub fn move_last(&mut self, pos: Vec2) {
        if let Some(last) = self.vertices.last_mut() {
            last.pos = pos;
        }
    }

    /// Fixes the current segment's sweep and appends a new free vertex at `pos`.
    pub fn append_segment(&mut self, pos: Vec2, angle: Angle) {
        if let Some(last) = self.vertices.last_mut() {
            last.angle = angle;
        }
        self.vertices.push(Vertex::new(pos));
    }

    /// Sets the sweep of the segment ending at the free vertex.
    ///
    /// Returns `false` if the path has no such segment.
    pub fn set_segment_angle(&mut self, angle: Angle) -> bool {
        let len = self.vertices.len();
        if len < 2 {
            return false;
        }
        self.vertices[len - 2].angle = angle;
        true
    }

    /// `true` if the last two vertices coincide.
    pub fn last_segment_is_degenerate(&self) -> bool {
        match self.vertices.as_slice() {
            [.., a, b] => a.pos == b.pos,
            _ => true,
        }
    }

    // ── Rectangle ───────────────────────────────────────────────────

    /// Spans the closed 5-vertex loop between the anchor and `pos`.
    pub fn stretch_rectangle(&mut self, pos: Vec2) {
        let Some(anchor) = self.vertices.first().map(|v| v.pos) else {
            return;
        };
        debug_assert_eq!(self.vertices.len(), 5, "rectangle path needs 5 vertices");
        if self.vertices.len() != 5 {
            return;
        }
        self.vertices[1].pos = Vec2::new(pos.x, anchor.y);
        self.vertices[2].pos = pos;
        self.vertices[3].pos = Vec2::new(anchor.x, pos.y);
    }

    /// Signed size between the anchor and the opposite corner.
    pub fn rectangle_size(&self) -> Vec2 {
        match (self.vertices.first(), self.vertices.len().checked_sub(3)) {
            (Some(anchor), Some(i)) => self.vertices[i].pos - anchor.pos,
            _ => Vec2::ZERO,
        }
    }

    // ── Arc ─────────────────────────────────────────────────────────

    /// Center vertex of an arc construction.
    pub fn arc_center(&self) -> Option<Vec2> {
        self.vertices.first().map(|v| v.pos)
    }

    /// Start point of the arc (second vertex).
    pub fn arc_start(&self) -> Option<Vec2> {
        self.vertices.get(1).map(|v| v.pos)
    }

    /// Replaces everything with the full-circle radius preview.
    pub fn set_circle_preview(&mut self, cursor: Vec2) {
        let Some(center) = self.arc_center() else {
            return;
        };
        self.vertices = arc_solver::preview_circle(center, cursor).to_vec();
    }

    /// Keeps center and start, replaces the rest by the swept vertices.
    pub fn set_arc_sweep(&mut self, sweep: Angle) {
        let (Some(center), Some(start)) = (self.arc_center(), self.arc_start()) else {
            return;
        };
        self.vertices.truncate(1);
        self.vertices
            .extend(arc_solver::build_swept_vertices(start, center, sweep));
    }

    /// Drops the center vertex; the remaining path is the arc itself.
    pub fn remove_center(&mut self) {
        if !self.vertices.is_empty() {
            self.vertices.remove(0);
        }
    }
}
