//! Symbol document: the ordered set of polygons being edited.

use indexmap::IndexMap;
use thiserror::Error;

use super::{Polygon, ShapeEdit, ShapeId};

/// Rejections raised by [`Symbol`] mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    /// The symbol is opened read-only
    #[error("symbol is read-only")]
    ReadOnly,
    /// No polygon with this id exists
    #[error("polygon {0} not found")]
    ShapeNotFound(ShapeId),
    /// A polygon with this id already exists
    #[error("polygon {0} already exists")]
    DuplicateShape(ShapeId),
    /// The resulting polygon would violate its invariants
    #[error("invalid polygon {id}: {reason}")]
    InvalidShape {
        /// Affected polygon
        id: ShapeId,
        /// Violated constraint
        reason: String,
    },
}

/// Symbol with its polygons in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Symbol {
    /// Display name
    pub name: String,
    polygons: IndexMap<ShapeId, Polygon>,
    read_only: bool,
}

impl Symbol {
    /// Creates an empty, writable symbol.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            polygons: IndexMap::new(),
            read_only: false,
        }
    }

    /// `true` if mutations are rejected.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Enables or disables write protection.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Number of polygons.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Looks up a polygon.
    pub fn polygon(&self, id: ShapeId) -> Option<&Polygon> {
        self.polygons.get(&id)
    }

    /// All polygons in insertion order.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.values()
    }

    /// Next unused id, one above the highest stored id.
    pub fn next_shape_id(&self) -> ShapeId {
        let max = self.polygons.keys().map(|id| id.0).max().unwrap_or(0);
        ShapeId(max + 1)
    }

    /// Adds a new polygon.
    pub fn insert(&mut self, polygon: Polygon) -> Result<ShapeId, DocumentError> {
        self.ensure_writable()?;
        let id = polygon.id;
        if self.polygons.contains_key(&id) {
            return Err(DocumentError::DuplicateShape(id));
        }
        polygon
            .validate()
            .map_err(|reason| DocumentError::InvalidShape { id, reason })?;
        self.polygons.insert(id, polygon);
        Ok(id)
    }

    /// Applies a partial edit to an existing polygon.
    ///
    /// The stored polygon is only replaced if the edited result is valid.
    pub fn apply_edit(&mut self, id: ShapeId, edit: &ShapeEdit) -> Result<(), DocumentError> {
        self.ensure_writable()?;
        let current = self
            .polygons
            .get(&id)
            .ok_or(DocumentError::ShapeNotFound(id))?;
        let mut edited = current.clone();
        edited.apply(edit);
        edited
            .validate()
            .map_err(|reason| DocumentError::InvalidShape { id, reason })?;
        self.polygons.insert(id, edited);
        Ok(())
    }

    /// Removes a polygon and returns it.
    pub fn remove(&mut self, id: ShapeId) -> Result<Polygon, DocumentError> {
        self.ensure_writable()?;
        self.polygons
            .shift_remove(&id)
            .ok_or(DocumentError::ShapeNotFound(id))
    }

    fn ensure_writable(&self) -> Result<(), DocumentError> {
        if self.read_only {
            Err(DocumentError::ReadOnly)
        } else {
            Ok(())
        }
    }
}
