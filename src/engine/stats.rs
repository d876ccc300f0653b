use super::error::StatsError;
use crate::reading::{char_len, Token};

/// Summary numbers for a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub character_count: usize,
    pub word_count: usize,
    pub median_length: usize,
}

impl Statistics {
    /// Statistics for raw input. `character_count` is the raw line count as
    /// read, passed in because it cannot be recovered from the tokens.
    pub fn for_input(tokens: &[Token], character_count: usize) -> Result<Self, StatsError> {
        Ok(Self {
            character_count,
            word_count: tokens.len(),
            median_length: median_length(tokens)?,
        })
    }

    /// Statistics for transformed output, counted over the space-joined text.
    pub fn for_output(tokens: &[Token]) -> Result<Self, StatsError> {
        Ok(Self {
            character_count: joined_char_count(tokens),
            word_count: tokens.len(),
            median_length: median_length(tokens)?,
        })
    }
}

/// Picks the token at index `n / 2` of a length-sorted copy.
///
/// The sort is stable, so equal-length tokens keep their original order. For
/// even counts this is the upper of the two middle tokens, not an average.
pub fn median_token(tokens: &[Token]) -> Result<&Token, StatsError> {
    if tokens.is_empty() {
        return Err(StatsError::NoData);
    }

    let mut by_length: Vec<&Token> = tokens.iter().collect();
    by_length.sort_by_key(|token| char_len(token));
    Ok(by_length[by_length.len() / 2])
}

pub fn median_length(tokens: &[Token]) -> Result<usize, StatsError> {
    median_token(tokens).map(|token| char_len(token))
}

/// Length of `tokens.join(" ")` without building the string.
pub fn joined_char_count(tokens: &[Token]) -> usize {
    let letters: usize = tokens.iter().map(|token| char_len(token)).sum();
    letters + tokens.len().saturating_sub(1)
}
