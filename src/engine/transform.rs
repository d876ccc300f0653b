//! Per-token rewrites applied by the pipeline.
//!
//! Each rule is a pure function of a single token. Lengths are counted in
//! characters, never bytes.

use crate::reading::{char_len, Token};

const REVERSE_MODULUS: usize = 4;
const TRUNCATE_MODULUS: usize = 5;
const TRUNCATE_LENGTH: usize = 5;
const UPPERCASE_WINDOW: usize = 5;
const UPPERCASE_THRESHOLD: usize = 3;

/// Reverses the token when its length is a multiple of 4 (empty included).
pub fn reverse_if_multiple_of_four(token: &str) -> Token {
    if char_len(token) % REVERSE_MODULUS == 0 {
        token.chars().rev().collect()
    } else {
        token.to_string()
    }
}

/// Cuts the token to its first 5 characters when its length is a multiple of 5.
pub fn truncate_if_multiple_of_five(token: &str) -> Token {
    if char_len(token) % TRUNCATE_MODULUS == 0 {
        token.chars().take(TRUNCATE_LENGTH).collect()
    } else {
        token.to_string()
    }
}

/// Uppercases the whole token when at least 3 of its first 5 characters are
/// already uppercase.
///
/// A character counts when uppercasing leaves it unchanged, so digits and
/// punctuation count too. Tokens shorter than 3 characters never qualify.
pub fn uppercase_if_mostly_upper(token: &str) -> Token {
    let already_upper = token
        .chars()
        .take(UPPERCASE_WINDOW)
        .filter(|&c| is_already_upper(c))
        .count();

    if already_upper >= UPPERCASE_THRESHOLD {
        token.to_uppercase()
    } else {
        token.to_string()
    }
}

fn is_already_upper(c: char) -> bool {
    let mut upper = c.to_uppercase();
    upper.next() == Some(c) && upper.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reverse_length_four() {
        assert_eq!(reverse_if_multiple_of_four("abcd"), "dcba");
    }

    #[test]
    fn test_reverse_length_eight() {
        assert_eq!(reverse_if_multiple_of_four("abcdefgh"), "hgfedcba");
    }

    #[test]
    fn test_reverse_empty_token() {
        assert_eq!(reverse_if_multiple_of_four(""), "");
    }

    #[test]
    fn test_reverse_leaves_other_lengths() {
        assert_eq!(reverse_if_multiple_of_four("xy"), "xy");
        assert_eq!(reverse_if_multiple_of_four("hello"), "hello");
    }

    #[test]
    fn test_reverse_counts_chars() {
        // 4 chars, 5 bytes
        assert_eq!(reverse_if_multiple_of_four("ébcd"), "dcbé");
    }

    #[test]
    fn test_truncate_length_ten() {
        assert_eq!(truncate_if_multiple_of_five("abcdefghij"), "abcde");
    }

    #[test]
    fn test_truncate_length_five_is_unchanged() {
        assert_eq!(truncate_if_multiple_of_five("hello"), "hello");
    }

    #[test]
    fn test_truncate_empty_token() {
        assert_eq!(truncate_if_multiple_of_five(""), "");
    }

    #[test]
    fn test_truncate_leaves_other_lengths() {
        assert_eq!(truncate_if_multiple_of_five("abcdef"), "abcdef");
    }

    #[test]
    fn test_uppercase_three_upper_in_prefix() {
        assert_eq!(uppercase_if_mostly_upper("ABCde"), "ABCDE");
    }

    #[test]
    fn test_uppercase_only_looks_at_first_five() {
        assert_eq!(uppercase_if_mostly_upper("abcdeFGHIJ"), "abcdeFGHIJ");
        assert_eq!(uppercase_if_mostly_upper("aBcDeF"), "aBcDeF");
    }

    #[test]
    fn test_uppercase_digits_count_as_upper() {
        assert_eq!(uppercase_if_mostly_upper("123abc"), "123ABC");
    }

    #[test]
    fn test_uppercase_short_token_never_changes() {
        assert_eq!(uppercase_if_mostly_upper("ab"), "ab");
        assert_eq!(uppercase_if_mostly_upper("1a"), "1a");
        assert_eq!(uppercase_if_mostly_upper(""), "");
    }

    #[test]
    fn test_uppercase_lowercase_word_unchanged() {
        assert_eq!(uppercase_if_mostly_upper("dcba"), "dcba");
    }

    #[test]
    fn test_sharp_s_is_not_already_upper() {
        // 'ß' uppercases to "SS", so it is not in uppercase form.
        assert!(!is_already_upper('ß'));
        assert!(is_already_upper('7'));
        assert!(is_already_upper('Q'));
    }

    proptest! {
        #[test]
        fn reverse_is_involution_on_multiples_of_four(token in "\\PC{0,24}") {
            let once = reverse_if_multiple_of_four(&token);
            if char_len(&token) % 4 == 0 {
                prop_assert_eq!(reverse_if_multiple_of_four(&once), token);
            } else {
                prop_assert_eq!(once, token);
            }
        }

        #[test]
        fn truncate_length_rule(token in "\\PC{0,30}") {
            let truncated = truncate_if_multiple_of_five(&token);
            let len = char_len(&token);
            if len % 5 == 0 {
                prop_assert_eq!(char_len(&truncated), len.min(5));
                prop_assert!(token.starts_with(truncated.as_str()));
            } else {
                prop_assert_eq!(truncated, token);
            }
        }

        #[test]
        fn uppercase_matches_prefix_count(token in "[a-zA-Z0-9]{0,12}") {
            let upper_in_prefix = token
                .chars()
                .take(5)
                .filter(|c| !c.is_ascii_lowercase())
                .count();
            let result = uppercase_if_mostly_upper(&token);
            if upper_in_prefix >= 3 {
                prop_assert_eq!(result, token.to_uppercase());
            } else {
                prop_assert_eq!(result, token);
            }
        }
    }
}
