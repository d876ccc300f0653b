use crate::reading::Token;

const HYPHEN: char = '-';

/// Merges every token ending in a hyphen with the token that follows it.
///
/// The trailing hyphen is dropped and the successor's full text is appended.
/// A merged token that still ends in a hyphen keeps absorbing successors, so
/// `["a-", "b-", "c"]` becomes `["abc"]`. A hyphenated last token has nothing
/// to absorb and is kept as is. Empty tokens never end in a hyphen.
pub fn join_hyphenated<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    tokens.into_iter().fold(Vec::new(), |mut joined, token| {
        match joined.last_mut() {
            Some(previous) if previous.ends_with(HYPHEN) => {
                previous.pop();
                previous.push_str(&token);
            }
            _ => joined.push(token),
        }
        joined
    })
}
