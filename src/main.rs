use clap::Parser;
use std::io;
use stringwork::app::{App, NextStep};
use stringwork::cli::Cli;
use stringwork::engine::Config;
use stringwork::repl::{command_to_app_event, EditorSource, ReplInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(Cli::parse());
    let mut app = App::new(config, io::stdout());

    // A path on the command line skips the prompt
    if app.run_configured()?.is_some() {
        return Ok(());
    }

    let mut repl = ReplInput::new(EditorSource::new()?);
    loop {
        let event = command_to_app_event(repl.read_command()?);
        if app.handle_event(event)? == NextStep::Exit {
            return Ok(());
        }
    }
}
