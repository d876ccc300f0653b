use std::path::PathBuf;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(PathBuf),
    Help,
    Quit,
}

/// What the caller should do after an event is handled.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NextStep {
    Prompt,
    Exit,
}
