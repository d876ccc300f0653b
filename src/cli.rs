use crate::engine::config::{Config, DEFAULT_OUTPUT_PATH};
use clap::Parser;
use std::path::PathBuf;

/// Reverse, truncate and uppercase the words of a text file.
#[derive(Parser, Debug)]
#[command(name = "stringwork", version)]
pub struct Cli {
    /// Input file; prompted for when omitted
    pub input: Option<PathBuf>,

    /// Where the transformed text is written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let config = Config::default().with_output_path(cli.output);
        match cli.input {
            Some(input) => config.with_input(input),
            None => config,
        }
    }
}
