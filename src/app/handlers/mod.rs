//! Feature handlers for AppCommand processing.
//!
//! Each handler groups the command execution of one feature area.
//! The controller dispatches to the matching handler function.

pub mod draw_tool;
pub mod history;
