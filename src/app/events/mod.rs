//! AppIntent and AppCommand enums for the intent/command data flow.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
