use crate::engine::{Statistics, StatsError};
use crate::reading::Token;

/// Everything one run computed, returned alongside the console output.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub input_stats: Result<Statistics, StatsError>,
    pub output_tokens: Vec<Token>,
    pub output_text: String,
    pub output_stats: Result<Statistics, StatsError>,
    /// False when the input could not be fully read.
    pub input_complete: bool,
    /// False when the output file could not be written.
    pub output_written: bool,
}
