use super::{parse_repl_input, ReplCommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;
use thiserror::Error;

pub const PROMPT_QUESTION: &str = "What list of strings would you like to print?";
pub const PROMPT_MARKER: &str = "=> ";

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),

    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Where prompt answers come from.
pub trait LineSource {
    /// Shows `question`, then reads one answer after `marker`.
    ///
    /// Returns `None` once the user ends input (Ctrl-D or Ctrl-C).
    fn ask(&mut self, question: &str, marker: &str) -> Result<Option<String>, ReplError>;
}

/// Prompt backed by rustyline
///
/// Provides:
/// - Arrow key navigation (left/right, up/down)
/// - Basic editing (backspace)
/// - In-session history of answers
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ReplError> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn ask(&mut self, question: &str, marker: &str) -> Result<Option<String>, ReplError> {
        println!("{}", question);
        match self.editor.readline(marker) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str())?;
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Asks for the input file and turns answers into commands.
pub struct ReplInput<S> {
    source: S,
}

impl<S: LineSource> ReplInput<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Prompts once and parses the answer. End of input reads as Quit.
    pub fn read_command(&mut self) -> Result<ReplCommand, ReplError> {
        Ok(self
            .source
            .ask(PROMPT_QUESTION, PROMPT_MARKER)?
            .map_or(ReplCommand::Quit, |line| parse_repl_input(&line)))
    }
}
