// Runtime configuration, passed explicitly to the app and storage layers.

use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Input file. When absent the user is prompted for one.
    pub input: Option<PathBuf>,

    /// Where the joined output is written, overwritten on every run (default `output.txt`)
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}
