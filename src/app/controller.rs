//! Application controller for central event processing.

use super::{AppCommand, AppIntent, AppState};

/// Routes UI events through the handlers onto the AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Creates a new controller.
    pub fn new() -> Self {
        Self
    }

    /// Processes an intent via intent->command mapping.
    ///
    /// Returns `true` if at least one resulting command was handled.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<bool> {
        let commands = self.map_intent_to_commands(state, intent);
        let mut handled = false;
        for command in commands {
            handled |= self.handle_command(state, command)?;
        }

        Ok(handled)
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Executes a mutating command on the AppState.
    /// Dispatches to the feature handlers in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<bool> {
        state.command_log.record(&command);
        use super::handlers;

        let handled = match command {
            // === Tool selection ===
            AppCommand::ActivateTool { mode } => handlers::draw_tool::activate(state, mode),
            AppCommand::DeactivateTool => handlers::draw_tool::deactivate(state),

            // === Construction ===
            AppCommand::PointerDown { world_pos } => {
                handlers::draw_tool::pointer_down(state, world_pos)
            }
            AppCommand::PointerMove { world_pos } => {
                handlers::draw_tool::pointer_move(state, world_pos)
            }
            AppCommand::PointerConfirm { world_pos } => {
                handlers::draw_tool::pointer_confirm(state, world_pos)
            }
            AppCommand::AbortConstruction => handlers::draw_tool::abort(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state)?,
            AppCommand::Redo => handlers::history::redo(state)?,

            // === Toolbar ===
            AppCommand::SetLayer { layer } => handlers::draw_tool::set_layer(state, layer),
            AppCommand::SetLineWidth { width } => {
                handlers::draw_tool::set_line_width(state, width)
            }
            AppCommand::SetAngle { angle } => handlers::draw_tool::set_angle(state, angle),
            AppCommand::SetFill { filled } => handlers::draw_tool::set_fill(state, filled),
            AppCommand::SetGrabArea { grab_area } => {
                handlers::draw_tool::set_grab_area(state, grab_area)
            }
        };

        Ok(handled)
    }
}
