//! Polygon shape of a symbol and the partial edits applied to it.

use super::{GraphicsLayer, Path};

/// Opaque handle of a shape stored in a [`Symbol`](super::Symbol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outline (open or closed) with style attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Handle inside the owning symbol
    pub id: ShapeId,
    /// Target layer
    pub layer: GraphicsLayer,
    /// Stroke width in mm
    pub line_width: f32,
    /// Interior is filled
    pub filled: bool,
    /// Interior selects the symbol when clicked
    pub grab_area: bool,
    /// Outline vertices
    pub path: Path,
}

impl Polygon {
    /// Creates a polygon.
    pub fn new(
        id: ShapeId,
        layer: GraphicsLayer,
        line_width: f32,
        filled: bool,
        grab_area: bool,
        path: Path,
    ) -> Self {
        Self {
            id,
            layer,
            line_width,
            filled,
            grab_area,
            path,
        }
    }

    /// Checks the invariants a stored polygon must satisfy.
    ///
    /// Returns a human readable reason for the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(format!("invalid line width {}", self.line_width));
        }
        validate_path(&self.path)
    }

    /// Applies all fields set in `edit`.
    pub fn apply(&mut self, edit: &ShapeEdit) {
        if let Some(path) = &edit.path {
            self.path = path.clone();
        }
        if let Some(layer) = edit.layer {
            self.layer = layer;
        }
        if let Some(width) = edit.line_width {
            self.line_width = width;
        }
        if let Some(filled) = edit.filled {
            self.filled = filled;
        }
        if let Some(grab_area) = edit.grab_area {
            self.grab_area = grab_area;
        }
    }
}

fn validate_path(path: &Path) -> Result<(), String> {
    if path.len() < 2 {
        return Err(format!("path needs at least 2 vertices, has {}", path.len()));
    }
    if let Some(v) = path.vertices().iter().find(|v| !v.pos.is_finite()) {
        return Err(format!("vertex position {:?} is not finite", v.pos));
    }
    if let Some(v) = path.vertices().iter().find(|v| !v.angle.is_valid_sweep()) {
        return Err(format!(
            "vertex angle {}° outside (-360°, 360°)",
            v.angle.to_deg()
        ));
    }
    Ok(())
}

/// Partial change of a polygon. Unset fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeEdit {
    /// New outline
    pub path: Option<Path>,
    /// New layer
    pub layer: Option<GraphicsLayer>,
    /// New stroke width
    pub line_width: Option<f32>,
    /// New fill flag
    pub filled: Option<bool>,
    /// New grab-area flag
    pub grab_area: Option<bool>,
}

impl ShapeEdit {
    /// Edit replacing the outline.
    pub fn path(path: Path) -> Self {
        Self {
            path: Some(path),
            ..Self::default()
        }
    }

    /// Edit moving the shape to another layer.
    pub fn layer(layer: GraphicsLayer) -> Self {
        Self {
            layer: Some(layer),
            ..Self::default()
        }
    }

    /// Edit changing the stroke width.
    pub fn line_width(width: f32) -> Self {
        Self {
            line_width: Some(width),
            ..Self::default()
        }
    }

    /// Edit changing the fill flag.
    pub fn filled(filled: bool) -> Self {
        Self {
            filled: Some(filled),
            ..Self::default()
        }
    }

    /// Edit changing the grab-area flag.
    pub fn grab_area(grab_area: bool) -> Self {
        Self {
            grab_area: Some(grab_area),
            ..Self::default()
        }
    }

    /// `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
            && self.layer.is_none()
            && self.line_width.is_none()
            && self.filled.is_none()
            && self.grab_area.is_none()
    }

    /// Folds a later edit over this one (later values win).
    pub fn merge(&mut self, later: ShapeEdit) {
        if later.path.is_some() {
            self.path = later.path;
        }
        if later.layer.is_some() {
            self.layer = later.layer;
        }
        if later.line_width.is_some() {
            self.line_width = later.line_width;
        }
        if later.filled.is_some() {
            self.filled = later.filled;
        }
        if later.grab_area.is_some() {
            self.grab_area = later.grab_area;
        }
    }
}
