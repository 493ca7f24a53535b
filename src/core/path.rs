//! Vertex sequence of a polygon outline.

use super::Angle;
use glam::Vec2;

/// A point of a path plus the arc sweep towards the following vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Position in symbol coordinates (mm)
    pub pos: Vec2,
    /// Sweep to the next vertex; 0° is a straight segment
    pub angle: Angle,
}

impl Vertex {
    /// Vertex with a straight segment to its successor.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            angle: Angle::DEG0,
        }
    }

    /// Vertex with an arc of `angle` to its successor.
    pub fn with_angle(pos: Vec2, angle: Angle) -> Self {
        Self { pos, angle }
    }
}

/// Ordered vertex list. For closed outlines the last vertex repeats the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    vertices: Vec<Vertex>,
}

impl Path {
    /// Creates a path from vertices.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Read-only view of all vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Mutable access to the vertex list.
    pub fn vertices_mut(&mut self) -> &mut Vec<Vertex> {
        &mut self.vertices
    }

    /// Consumes the path and returns its vertices.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` if the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of segments between consecutive vertices.
    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// `true` if the path has at least one segment and ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => self.vertices.len() > 2 && first.pos == last.pos,
            _ => false,
        }
    }
}

impl From<Vec<Vertex>> for Path {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}
