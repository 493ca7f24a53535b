//! All-or-nothing edit of one polygon on top of an undo group.

use super::history::{DocumentMutation, HistoryError, UndoStack};
use crate::core::{DocumentError, Polygon, ShapeEdit, ShapeId, Symbol};
use std::sync::Arc;
use thiserror::Error;

/// Coarse classification of an [`EditError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document rejected the change
    Document,
    /// The undo history refused the operation
    History,
    /// The transaction was already committed or aborted
    Inert,
}

/// Failure of a transaction operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// The document rejected the change
    #[error(transparent)]
    Document(DocumentError),
    /// The undo history refused the operation
    #[error(transparent)]
    History(HistoryError),
    /// Operation on a closed transaction
    #[error("edit transaction for polygon {0} is already closed")]
    Inert(ShapeId),
}

impl EditError {
    /// Classification for callers that only branch on the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::Document(_) => ErrorKind::Document,
            EditError::History(_) => ErrorKind::History,
            EditError::Inert(_) => ErrorKind::Inert,
        }
    }
}

impl From<HistoryError> for EditError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::Document(doc) => EditError::Document(doc),
            other => EditError::History(other),
        }
    }
}

impl From<DocumentError> for EditError {
    fn from(err: DocumentError) -> Self {
        EditError::Document(err)
    }
}

/// Stages changes to one polygon as a single undoable unit.
///
/// Every staged change is applied to the live document immediately (that is
/// the preview), but only `commit` produces an undo entry. `abort` restores
/// the document exactly as it was before the transaction began. Afterwards
/// the transaction is inert.
#[derive(Debug)]
pub struct EditTransaction {
    shape: ShapeId,
    label: String,
    staged: ShapeEdit,
    open: bool,
}

impl EditTransaction {
    /// Opens a group and inserts `polygon` as the staged shape.
    pub fn begin_insert(
        history: &mut UndoStack,
        symbol: &mut Arc<Symbol>,
        label: &str,
        polygon: Polygon,
    ) -> Result<Self, EditError> {
        let shape = polygon.id;
        history.begin_group(label, symbol)?;
        if let Err(err) = history.append_to_group(symbol, DocumentMutation::InsertPolygon(polygon)) {
            history.abort_group(symbol)?;
            return Err(err.into());
        }
        log::debug!("Transaction '{}' opened, inserted polygon {}", label, shape);
        Ok(Self {
            shape,
            label: label.to_owned(),
            staged: ShapeEdit::default(),
            open: true,
        })
    }

    /// Opens a group for editing an already stored polygon.
    pub fn begin_edit(
        history: &mut UndoStack,
        symbol: &mut Arc<Symbol>,
        label: &str,
        shape: ShapeId,
    ) -> Result<Self, EditError> {
        if symbol.polygon(shape).is_none() {
            return Err(DocumentError::ShapeNotFound(shape).into());
        }
        history.begin_group(label, symbol)?;
        log::debug!("Transaction '{}' opened on polygon {}", label, shape);
        Ok(Self {
            shape,
            label: label.to_owned(),
            staged: ShapeEdit::default(),
            open: true,
        })
    }

    /// Handle of the staged shape.
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Undo label of the group.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// `false` after commit or abort.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// All changes staged so far, folded into one edit.
    pub fn staged(&self) -> &ShapeEdit {
        &self.staged
    }

    /// Applies `edit` to the live preview without recording an undo entry.
    ///
    /// On error the document keeps its previous preview; the caller decides
    /// whether to abort.
    pub fn stage(
        &mut self,
        history: &mut UndoStack,
        symbol: &mut Arc<Symbol>,
        edit: ShapeEdit,
    ) -> Result<(), EditError> {
        self.ensure_open()?;
        if edit.is_empty() {
            return Ok(());
        }
        history.append_to_group(
            symbol,
            DocumentMutation::EditPolygon {
                id: self.shape,
                edit: edit.clone(),
            },
        )?;
        self.staged.merge(edit);
        Ok(())
    }

    /// Records all staged changes as exactly one undo entry.
    pub fn commit(&mut self, history: &mut UndoStack) -> Result<ShapeId, EditError> {
        self.ensure_open()?;
        self.open = false;
        history.commit_group()?;
        log::debug!("Transaction '{}' committed polygon {}", self.label, self.shape);
        Ok(self.shape)
    }

    /// Discards all staged changes, including the insertion.
    pub fn abort(
        &mut self,
        history: &mut UndoStack,
        symbol: &mut Arc<Symbol>,
    ) -> Result<(), EditError> {
        self.ensure_open()?;
        self.open = false;
        history.abort_group(symbol)?;
        log::debug!("Transaction '{}' aborted", self.label);
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), EditError> {
        debug_assert!(self.open, "edit transaction used after it became inert");
        if self.open {
            Ok(())
        } else {
            Err(EditError::Inert(self.shape))
        }
    }
}
