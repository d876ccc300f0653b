use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Writing to the console failed; nothing further can be reported.
    #[error("console output failed: {0}")]
    Console(#[from] io::Error),
}
