use crate::core::{DocumentError, Polygon, ShapeEdit, ShapeId, Symbol};
use std::sync::Arc;
use thiserror::Error;

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_DEPTH: usize = 200;

/// A single document change recorded inside an open group.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMutation {
    /// Add a new polygon to the symbol
    InsertPolygon(Polygon),
    /// Change fields of an existing polygon
    EditPolygon {
        /// Target polygon
        id: ShapeId,
        /// Fields to change
        edit: ShapeEdit,
    },
}

/// Refusals of the undo history.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistoryError {
    /// `begin_group` while another group is still open
    #[error("an undo group is already active")]
    GroupAlreadyActive,
    /// Group operation without an open group
    #[error("no undo group is active")]
    NoActiveGroup,
    /// Undo/redo while a group is open
    #[error("undo/redo is not possible while an undo group is active")]
    GroupActive,
    /// The document rejected a mutation
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Labelled document state.
///
/// Uses an Arc clone (copy-on-write): taking a snapshot is O(1); the actual
/// symbol clone only happens on the next `Arc::make_mut()`.
#[derive(Debug, Clone)]
struct Snapshot {
    label: String,
    symbol: Arc<Symbol>,
}

/// Group opened by `begin_group`, not yet committed or aborted.
#[derive(Debug)]
struct ActiveGroup {
    label: String,
    before: Arc<Symbol>,
    mutations: usize,
}

/// Undo/redo manager with snapshotting and grouped entries.
///
/// All mutations between `begin_group` and `commit_group` form exactly one
/// undo entry; `abort_group` restores the state from before the group.
#[derive(Debug)]
pub struct UndoStack {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
    group: Option<ActiveGroup>,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new_with_capacity(DEFAULT_HISTORY_DEPTH)
    }
}

impl UndoStack {
    /// Creates a history keeping at most `max_depth` undo steps.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth,
            group: None,
        }
    }

    /// Number of undo steps available.
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// `true` if there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Checks whether undo is possible.
    pub fn can_undo(&self) -> bool {
        self.group.is_none() && !self.undo_stack.is_empty()
    }

    /// Checks whether redo is possible.
    pub fn can_redo(&self) -> bool {
        self.group.is_none() && !self.redo_stack.is_empty()
    }

    /// `true` while a group is open.
    pub fn is_group_active(&self) -> bool {
        self.group.is_some()
    }

    /// Label of the step `undo` would revert.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|s| s.label.as_str())
    }

    /// Label of the step `redo` would restore.
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|s| s.label.as_str())
    }

    // ── Groups ──────────────────────────────────────────────────────

    /// Opens a group; `symbol` is the state `abort_group` returns to.
    pub fn begin_group(&mut self, label: &str, symbol: &Arc<Symbol>) -> Result<(), HistoryError> {
        if self.group.is_some() {
            log::warn!("begin_group('{}') refused: group already active", label);
            return Err(HistoryError::GroupAlreadyActive);
        }
        log::debug!("Undo group '{}' opened", label);
        self.group = Some(ActiveGroup {
            label: label.to_owned(),
            before: Arc::clone(symbol),
            mutations: 0,
        });
        Ok(())
    }

    /// Applies a mutation to the symbol as part of the open group.
    ///
    /// A rejected mutation leaves the symbol unchanged; the group stays open.
    pub fn append_to_group(
        &mut self,
        symbol: &mut Arc<Symbol>,
        mutation: DocumentMutation,
    ) -> Result<(), HistoryError> {
        let group = self.group.as_mut().ok_or(HistoryError::NoActiveGroup)?;
        let doc = Arc::make_mut(symbol);
        match mutation {
            DocumentMutation::InsertPolygon(polygon) => {
                doc.insert(polygon)?;
            }
            DocumentMutation::EditPolygon { id, edit } => {
                doc.apply_edit(id, &edit)?;
            }
        }
        group.mutations += 1;
        Ok(())
    }

    /// Closes the open group.
    ///
    /// Returns `true` if an undo entry was recorded, `false` for an empty group.
    pub fn commit_group(&mut self) -> Result<bool, HistoryError> {
        let group = self.group.take().ok_or(HistoryError::NoActiveGroup)?;
        if group.mutations == 0 {
            log::debug!("Undo group '{}' was empty, nothing recorded", group.label);
            return Ok(false);
        }
        log::debug!(
            "Undo group '{}' committed ({} mutations)",
            group.label,
            group.mutations
        );
        self.push_undo(Snapshot {
            label: group.label,
            symbol: group.before,
        });
        self.redo_stack.clear();
        Ok(true)
    }

    /// Discards the open group and restores the symbol from before `begin_group`.
    pub fn abort_group(&mut self, symbol: &mut Arc<Symbol>) -> Result<(), HistoryError> {
        let group = self.group.take().ok_or(HistoryError::NoActiveGroup)?;
        log::debug!(
            "Undo group '{}' aborted ({} mutations reverted)",
            group.label,
            group.mutations
        );
        *symbol = group.before;
        Ok(())
    }

    // ── Undo / Redo ─────────────────────────────────────────────────

    /// Restores the previous state. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self, symbol: &mut Arc<Symbol>) -> Result<bool, HistoryError> {
        if self.group.is_some() {
            return Err(HistoryError::GroupActive);
        }
        let Some(prev) = self.undo_stack.pop() else {
            return Ok(false);
        };
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(Snapshot {
            label: prev.label.clone(),
            symbol: Arc::clone(symbol),
        });
        log::info!("Undo: {}", prev.label);
        *symbol = prev.symbol;
        Ok(true)
    }

    /// Re-applies an undone state. Returns `false` if there is nothing to redo.
    pub fn redo(&mut self, symbol: &mut Arc<Symbol>) -> Result<bool, HistoryError> {
        if self.group.is_some() {
            return Err(HistoryError::GroupActive);
        }
        let Some(next) = self.redo_stack.pop() else {
            return Ok(false);
        };
        self.push_undo(Snapshot {
            label: next.label.clone(),
            symbol: Arc::clone(symbol),
        });
        log::info!("Redo: {}", next.label);
        *symbol = next.symbol;
        Ok(true)
    }

    fn push_undo(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GraphicsLayer, Path, Vertex};
    use glam::Vec2;

    fn polygon(id: u64) -> Polygon {
        Polygon::new(
            ShapeId(id),
            GraphicsLayer::SymbolOutlines,
            0.2,
            false,
            false,
            Path::new(vec![
                Vertex::new(Vec2::ZERO),
                Vertex::new(Vec2::new(id as f32, 1.0)),
            ]),
        )
    }

    fn insert_grouped(history: &mut UndoStack, symbol: &mut Arc<Symbol>, id: u64) {
        history.begin_group("insert", symbol).expect("begin");
        history
            .append_to_group(symbol, DocumentMutation::InsertPolygon(polygon(id)))
            .expect("append");
        assert!(history.commit_group().expect("commit"));
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = UndoStack::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.is_empty());
    }

    #[test]
    fn commit_records_one_entry_per_group() {
        let mut history = UndoStack::new_with_capacity(10);
        let mut symbol = Arc::new(Symbol::new("R"));

        history.begin_group("Add symbol polygon", &symbol).expect("begin");
        history
            .append_to_group(&mut symbol, DocumentMutation::InsertPolygon(polygon(1)))
            .expect("insert");
        for x in 1..5 {
            let edit = ShapeEdit::path(Path::new(vec![
                Vertex::new(Vec2::ZERO),
                Vertex::new(Vec2::new(x as f32, 0.0)),
            ]));
            history
                .append_to_group(&mut symbol, DocumentMutation::EditPolygon { id: ShapeId(1), edit })
                .expect("edit");
        }
        assert!(history.commit_group().expect("commit"));

        assert_eq!(history.len(), 1);
        assert_eq!(history.undo_label(), Some("Add symbol polygon"));
    }

    #[test]
    fn empty_group_records_nothing() {
        let mut history = UndoStack::new_with_capacity(10);
        let symbol = Arc::new(Symbol::new("R"));
        history.begin_group("noop", &symbol).expect("begin");
        assert!(!history.commit_group().expect("commit"));
        assert!(history.is_empty());
    }

    #[test]
    fn abort_restores_state_before_group() {
        let mut history = UndoStack::new_with_capacity(10);
        let mut symbol = Arc::new(Symbol::new("R"));
        insert_grouped(&mut history, &mut symbol, 1);
        let before = (*symbol).clone();

        history.begin_group("insert", &symbol).expect("begin");
        history
            .append_to_group(&mut symbol, DocumentMutation::InsertPolygon(polygon(2)))
            .expect("append");
        assert_eq!(symbol.polygon_count(), 2);

        history.abort_group(&mut symbol).expect("abort");
        assert_eq!(*symbol, before);
        assert_eq!(history.len(), 1);
        assert!(!history.is_group_active());
    }

    #[test]
    fn second_group_is_refused() {
        let mut history = UndoStack::new_with_capacity(10);
        let symbol = Arc::new(Symbol::new("R"));
        history.begin_group("a", &symbol).expect("begin");
        assert_eq!(
            history.begin_group("b", &symbol),
            Err(HistoryError::GroupAlreadyActive)
        );
    }

    #[test]
    fn append_without_group_is_refused() {
        let mut history = UndoStack::new_with_capacity(10);
        let mut symbol = Arc::new(Symbol::new("R"));
        assert_eq!(
            history.append_to_group(&mut symbol, DocumentMutation::InsertPolygon(polygon(1))),
            Err(HistoryError::NoActiveGroup)
        );
        assert_eq!(symbol.polygon_count(), 0);
    }

    #[test]
    fn undo_and_redo_restore_snapshots() {
        let mut history = UndoStack::new_with_capacity(10);
        let mut symbol = Arc::new(Symbol::new("R"));
        insert_grouped(&mut history, &mut symbol, 1);
        insert_grouped(&mut history, &mut symbol, 2);

        assert!(history.undo(&mut symbol).expect("undo"));
        assert_eq!(symbol.polygon_count(), 1);
        assert!(history.can_redo());

        assert!(history.redo(&mut symbol).expect("redo"));
        assert_eq!(symbol.polygon_count(), 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_is_refused_while_group_active() {
        let mut history = UndoStack::new_with_capacity(10);
        let mut symbol = Arc::new(Symbol::new("R"));
        insert_grouped(&mut history, &mut symbol, 1);

        history.begin_group("open", &symbol).expect("begin");
        assert_eq!(history.undo(&mut symbol), Err(HistoryError::GroupActive));
        assert_eq!(history.redo(&mut symbol), Err(HistoryError::GroupActive));
        assert!(!history.can_undo());
    }

    #[test]
    fn new_commit_clears_redo_stack() {
        let mut history = UndoStack::new_with_capacity(10);
        let mut symbol = Arc::new(Symbol::new("R"));
        insert_grouped(&mut history, &mut symbol, 1);
        history.undo(&mut symbol).expect("undo");
        assert!(history.can_redo());

        insert_grouped(&mut history, &mut symbol, 7);
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = UndoStack::new_with_capacity(3);
        let mut symbol = Arc::new(Symbol::new("R"));
        for id in 1..=5 {
            insert_grouped(&mut history, &mut symbol, id);
        }

        let mut undo_count = 0;
        while history.undo(&mut symbol).expect("undo") {
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
        assert_eq!(symbol.polygon_count(), 2);
    }

    #[test]
    fn rejected_mutation_keeps_group_open() {
        let mut history = UndoStack::new_with_capacity(10);
        let mut symbol = Arc::new(Symbol::new("R"));
        Arc::make_mut(&mut symbol).set_read_only(true);

        history.begin_group("insert", &symbol).expect("begin");
        let result =
            history.append_to_group(&mut symbol, DocumentMutation::InsertPolygon(polygon(1)));
        assert_eq!(result, Err(HistoryError::Document(DocumentError::ReadOnly)));
        assert!(history.is_group_active());
        assert!(!history.commit_group().expect("commit"));
    }
}
