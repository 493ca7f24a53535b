//! State definitions and constructor of the drawing tool.

use super::super::{strategy_for, ConstructionState, ShapeMode, ShapeStrategy, StyleSnapshot};
use crate::app::transaction::EditTransaction;
use crate::core::ShapeId;

/// Open construction: the shape being drawn plus the transaction staging it.
#[derive(Debug)]
pub(super) struct Construction {
    pub(super) state: ConstructionState,
    pub(super) transaction: EditTransaction,
}

/// Interaction state machine of one shape mode.
#[derive(Debug)]
pub struct DrawShapeTool {
    pub(super) mode: ShapeMode,
    pub(super) strategy: Box<dyn ShapeStrategy>,
    /// Defaults for the next shape; updated by the style callbacks
    pub(super) style: StyleSnapshot,
    pub(super) active: bool,
    /// `Some` while Constructing
    pub(super) construction: Option<Construction>,
}

impl DrawShapeTool {
    /// Creates an inactive tool with built-in style defaults.
    pub fn new(mode: ShapeMode) -> Self {
        Self::with_style(mode, StyleSnapshot::for_mode(mode))
    }

    /// Creates an inactive tool with the given style defaults.
    pub fn with_style(mode: ShapeMode, style: StyleSnapshot) -> Self {
        Self {
            mode,
            strategy: strategy_for(mode),
            style,
            active: false,
            construction: None,
        }
    }

    /// Mode this tool draws.
    pub fn mode(&self) -> ShapeMode {
        self.mode
    }

    /// Style defaults for the next shape.
    pub fn style(&self) -> &StyleSnapshot {
        &self.style
    }

    /// `true` between `activate` and `deactivate`.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `true` while a shape is being drawn.
    pub fn is_constructing(&self) -> bool {
        self.construction.is_some()
    }

    /// Handle of the staged shape, for the preview renderer.
    pub fn current_shape(&self) -> Option<ShapeId> {
        self.construction.as_ref().map(|c| c.transaction.shape())
    }

    /// Read-only view of the open construction.
    pub fn construction(&self) -> Option<&ConstructionState> {
        self.construction.as_ref().map(|c| &c.state)
    }
}
