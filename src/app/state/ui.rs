use crate::app::host::{Notification, ToolHost};
use crate::app::tools::{ShapeMode, StyleSnapshot};
use crate::core::ShapeId;

/// Number of error notifications kept for display.
pub const MAX_NOTIFICATIONS: usize = 32;

/// UI-related application state
#[derive(Debug, Default)]
pub struct UiState {
    /// Pending error notifications, oldest first
    pub notifications: Vec<Notification>,
    /// Shape the renderer highlights as the construction preview
    pub highlighted_shape: Option<ShapeId>,
    /// Mode and style the toolbar currently shows
    pub toolbar: Option<(ShapeMode, StyleSnapshot)>,
}

impl UiState {
    /// Creates the default UI state (no notifications, no preview).
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl ToolHost for UiState {
    fn show_error(&mut self, title: &str, message: &str) {
        if self.notifications.len() >= MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
        self.notifications.push(Notification {
            title: title.to_owned(),
            message: message.to_owned(),
        });
    }

    fn style_changed(&mut self, mode: ShapeMode, style: &StyleSnapshot) {
        self.toolbar = Some((mode, *style));
    }

    fn preview_changed(&mut self, shape: Option<ShapeId>) {
        self.highlighted_shape = shape;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_are_bounded() {
        let mut ui = UiState::new();
        for i in 0..MAX_NOTIFICATIONS + 5 {
            ui.show_error("Error", &format!("failure {i}"));
        }
        assert_eq!(ui.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(ui.notifications[0].message, "failure 5");

        let taken = ui.take_notifications();
        assert_eq!(taken.len(), MAX_NOTIFICATIONS);
        assert!(ui.notifications.is_empty());
    }
}
