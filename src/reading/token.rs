/// A single whitespace-delimited unit of text.
///
/// Tokens carry no identity beyond their text; every transform hands back a
/// fresh value.
pub type Token = String;

/// Length of a token in characters (Unicode scalar values), the unit every
/// length rule in the engine is measured in.
pub fn char_len(token: &str) -> usize {
    token.chars().count()
}
