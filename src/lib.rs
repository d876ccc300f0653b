//! Reads whitespace-delimited tokens from a text file, joins hyphen-continued
//! tokens, rewrites each token through a fixed set of rules and reports
//! length statistics before writing the result out.

pub mod app;
pub mod cli;
pub mod engine;
pub mod input;
pub mod reading;
pub mod repl;
pub mod storage;
