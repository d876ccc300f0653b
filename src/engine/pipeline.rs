use super::transform::{
    reverse_if_multiple_of_four, truncate_if_multiple_of_five, uppercase_if_mostly_upper,
};
use crate::reading::Token;

/// Runs one token through the fixed rewrite order: reverse, truncate, uppercase.
pub fn transform_token(token: &str) -> Token {
    let reversed = reverse_if_multiple_of_four(token);
    let truncated = truncate_if_multiple_of_five(&reversed);
    uppercase_if_mostly_upper(&truncated)
}

/// Transforms every token in order, handing each result to `on_token` as soon
/// as it is produced.
pub fn run_pipeline<F>(tokens: &[Token], mut on_token: F) -> Vec<Token>
where
    F: FnMut(&str),
{
    tokens
        .iter()
        .map(|token| {
            let transformed = transform_token(token);
            on_token(&transformed);
            transformed
        })
        .collect()
}
