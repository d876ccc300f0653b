use super::ReplCommand;

/// Parse one prompt line into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - anything else → the path of the file to process
///
/// Only the line terminator is removed. The path is otherwise taken verbatim,
/// so an empty or malformed name surfaces later as an open error.
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input
        .strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(input);

    match input {
        ":q" | ":quit" => ReplCommand::Quit,
        ":h" | ":help" => ReplCommand::Help,
        path => ReplCommand::LoadFile(path.to_string()),
    }
}
