use super::token::{char_len, Token};
use std::io::{self, BufRead};

/// Tokens split from a line stream, plus the raw character count of the lines
/// they came from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenizedText {
    pub tokens: Vec<Token>,
    /// Characters read, line terminators included. This is not the sum of the
    /// token lengths.
    pub char_count: usize,
}

impl TokenizedText {
    pub fn push_line(&mut self, line: &str) {
        self.char_count += char_len(line);
        self.tokens.extend(line.split_whitespace().map(str::to_string));
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Tokenizes in-memory text line by line, keeping line terminators in the count.
pub fn tokenize_text(text: &str) -> TokenizedText {
    let mut tokenized = TokenizedText::default();
    for line in text.split_inclusive('\n') {
        tokenized.push_line(line);
    }
    tokenized
}

/// Tokenizes a line stream into `into`.
///
/// Lines are appended as they are read, so on error `into` still holds
/// everything read before the failure.
pub fn tokenize_reader<R: BufRead>(mut reader: R, into: &mut TokenizedText) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }
        into.push_line(&line);
    }
}
