pub mod token;
pub mod tokenize;

pub use token::{char_len, Token};
pub use tokenize::{tokenize_reader, tokenize_text, TokenizedText};
