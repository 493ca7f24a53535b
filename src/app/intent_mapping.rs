//! Mapping of UI intents to mutating app commands.

use super::{AppCommand, AppIntent, AppState};

/// Translates an `AppIntent` into a sequence of executable `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SelectToolRequested { mode } => vec![AppCommand::ActivateTool { mode }],
        AppIntent::PointerPressed { world_pos } => vec![AppCommand::PointerDown { world_pos }],
        AppIntent::PointerMoved { world_pos } => vec![AppCommand::PointerMove { world_pos }],
        // a double click is handled exactly like a single confirm
        AppIntent::PointerDoubleClicked { world_pos } => {
            vec![AppCommand::PointerConfirm { world_pos }]
        }
        // staged Escape: first abort the construction, then leave the tool
        AppIntent::CancelRequested => {
            if state.tools.is_constructing() {
                vec![AppCommand::AbortConstruction]
            } else if state.tools.active_mode().is_some() {
                vec![AppCommand::DeactivateTool]
            } else {
                vec![]
            }
        }
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::LayerChanged { layer } => vec![AppCommand::SetLayer { layer }],
        AppIntent::LineWidthChanged { width } => vec![AppCommand::SetLineWidth { width }],
        AppIntent::AngleChanged { angle } => vec![AppCommand::SetAngle { angle }],
        AppIntent::FillChanged { filled } => vec![AppCommand::SetFill { filled }],
        AppIntent::GrabAreaChanged { grab_area } => vec![AppCommand::SetGrabArea { grab_area }],
    }
}
