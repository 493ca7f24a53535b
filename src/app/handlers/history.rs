//! Handlers for undo/redo.

use crate::app::history::HistoryError;
use crate::app::AppState;

/// Runs one undo step, if available.
///
/// Refused (returns `false`) while a construction keeps an undo group open.
pub fn undo(state: &mut AppState) -> anyhow::Result<bool> {
    match state.history.undo(&mut state.symbol) {
        Ok(true) => Ok(true),
        Ok(false) => {
            log::debug!("Undo: nothing to do");
            Ok(false)
        }
        Err(HistoryError::GroupActive) => {
            log::warn!("Undo refused while a shape is being drawn");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

/// Runs one redo step, if available.
pub fn redo(state: &mut AppState) -> anyhow::Result<bool> {
    match state.history.redo(&mut state.symbol) {
        Ok(true) => Ok(true),
        Ok(false) => {
            log::debug!("Redo: nothing to do");
            Ok(false)
        }
        Err(HistoryError::GroupActive) => {
            log::warn!("Redo refused while a shape is being drawn");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
