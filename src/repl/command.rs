use crate::app::AppEvent;
use std::path::PathBuf;

/// Commands that can be parsed from prompt input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit without processing a file
    Quit,

    /// Show help information
    Help,

    /// Process the file at this path
    LoadFile(String),
}

/// Convert a parsed prompt command into an AppEvent
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(PathBuf::from(path)),
    }
}
