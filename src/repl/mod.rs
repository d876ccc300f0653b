//! Interactive prompt
//!
//! Asks for the input file when none was given on the command line.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions and conversion to AppEvent
//! - **parser.rs**: Turns a prompt line into a command
//! - **input.rs**: Rustyline-backed prompt behind the `LineSource` trait

pub mod command;
pub mod input;
pub mod parser;

pub use command::{command_to_app_event, ReplCommand};
pub use input::{EditorSource, LineSource, ReplError, ReplInput};
pub use parser::parse_repl_input;
