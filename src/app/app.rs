use super::error::AppError;
use super::event::{AppEvent, NextStep};
use super::report::RunReport;
use crate::engine::{join_hyphenated, run_pipeline, Config, Statistics, StatsError};
use crate::input;
use crate::reading::Token;
use crate::storage;
use log::{debug, warn};
use std::io::Write;
use std::path::Path;

const HELP_TEXT: &str = "\
Enter the path of a text file to process.
  :h, :help   Show this help
  :q, :quit   Quit without processing";

/// Drives one processing run and writes its console report to `console`.
pub struct App<W> {
    config: Config,
    console: W,
}

impl<W: Write> App<W> {
    pub fn new(config: Config, console: W) -> Self {
        Self { config, console }
    }

    pub fn into_console(self) -> W {
        self.console
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<NextStep, AppError> {
        match event {
            AppEvent::LoadFile(path) => {
                self.run(&path)?;
                Ok(NextStep::Exit)
            }
            AppEvent::Help => {
                writeln!(self.console, "{}", HELP_TEXT)?;
                Ok(NextStep::Prompt)
            }
            AppEvent::Quit => Ok(NextStep::Exit),
        }
    }

    /// Runs on the configured input path, if there is one.
    pub fn run_configured(&mut self) -> Result<Option<RunReport>, AppError> {
        match self.config.input.clone() {
            Some(input) => self.run(&input).map(Some),
            None => Ok(None),
        }
    }

    /// Loads `input`, transforms it and writes the result to the configured
    /// output path.
    ///
    /// File failures are reported on the console and the run carries on with
    /// whatever was read. Only a failing console is an error.
    pub fn run(&mut self, input: &Path) -> Result<RunReport, AppError> {
        debug!("loading {}", input.display());
        let (document, input_complete) = match input::load(input) {
            Ok(document) => (document, true),
            Err(err) => {
                warn!(
                    "input {} failed ({:?}): {}",
                    err.path().display(),
                    err.io_error().kind(),
                    err
                );
                writeln!(self.console, "{}", err)?;
                (err.into_partial(), false)
            }
        };

        debug!(
            "read {} tokens from {}",
            document.text.word_count(),
            document.source.display()
        );
        let input_stats = Statistics::for_input(document.tokens(), document.char_count());
        self.print_input_summary(document.char_count(), document.text.word_count(), &input_stats)?;

        let joined = join_hyphenated(document.text.tokens);
        debug!("hyphen join left {} tokens", joined.len());

        let mut echo_result = Ok(());
        let console = &mut self.console;
        let output_tokens = run_pipeline(&joined, |token| {
            if echo_result.is_ok() {
                echo_result = writeln!(console, "{}", token);
            }
        });
        echo_result?;

        let output_text = output_tokens.join(" ");
        writeln!(self.console, "{}", output_text)?;

        let output_stats = Statistics::for_output(&output_tokens);
        self.print_output_summary(&output_tokens, &output_text, &output_stats)?;

        let output_path = self.config.output_path.clone();
        debug!("writing {}", output_path.display());
        let output_written = match storage::write_output(&output_path, &output_text) {
            Ok(()) => true,
            Err(err) => {
                warn!("output {} failed: {}", err.path().display(), err);
                writeln!(self.console, "{}", err)?;
                false
            }
        };

        Ok(RunReport {
            input_stats,
            output_tokens,
            output_text,
            output_stats,
            input_complete,
            output_written,
        })
    }

    fn print_input_summary(
        &mut self,
        char_count: usize,
        word_count: usize,
        stats: &Result<Statistics, StatsError>,
    ) -> Result<(), AppError> {
        match stats {
            Ok(stats) => writeln!(
                self.console,
                "the list of strings has {} characters in it, composed of {} words, with a median length of {}.",
                stats.character_count, stats.word_count, stats.median_length
            )?,
            Err(err) => writeln!(
                self.console,
                "the list of strings has {} characters in it, composed of {} words, with no median length ({}).",
                char_count, word_count, err
            )?,
        }
        Ok(())
    }

    fn print_output_summary(
        &mut self,
        tokens: &[Token],
        output_text: &str,
        stats: &Result<Statistics, StatsError>,
    ) -> Result<(), AppError> {
        match stats {
            Ok(stats) => writeln!(
                self.console,
                "\n\nThe output has a median string length of {}, a word count of {}, and a character count of {}. ",
                stats.median_length, stats.word_count, stats.character_count
            )?,
            Err(err) => writeln!(
                self.console,
                "\n\nThe output has no median string length ({}), a word count of {}, and a character count of {}. ",
                err,
                tokens.len(),
                output_text.chars().count()
            )?,
        }
        writeln!(
            self.console,
            "It now reads: \n\"{}\",\n and is printed to \"{}\"",
            output_text,
            self.config.output_path.display()
        )?;
        Ok(())
    }
}
