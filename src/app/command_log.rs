//! Bounded log of executed commands.

use super::AppCommand;

/// Stores executed commands in order.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Creates an empty command log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an executed command.
    /// Limited to MAX_ENTRIES; the older half is dropped when full.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Number of logged commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no commands were logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of all entries.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_drops_older_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::Undo);
        }
        log.record(&AppCommand::Redo);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.entries().last(), Some(&AppCommand::Redo));
    }
}
