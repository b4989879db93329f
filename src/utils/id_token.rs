//! Identifier token codec and validation.
//!
//! Resource identifiers are integers in `[0, MAX_ID]`, rendered as lowercase
//! base-36 tokens on the wire. Raw keyboard input is normalized here before
//! any range or conflict checks run.

use rand::Rng;
use std::num::IntErrorKind;

/// Largest identifier the service accepts; `zik0zj` in base 36.
pub const MAX_ID: i64 = 2_147_483_647;

/// Field-level validity message for tokens that decode above [`MAX_ID`].
pub const RANGE_MESSAGE: &str = "value must be a base-36 integer \u{2264} zik0zj";

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Why a token failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Nothing to decode.
    Empty,
    /// Contains characters outside `[0-9a-z]` (cannot happen after
    /// [`canonicalize`]).
    Malformed,
    /// Decodes to an integer above [`MAX_ID`].
    OutOfRange,
}

/// Strip every character outside `[0-9A-Za-z]` and lowercase the rest.
pub fn canonicalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// True when the most recently typed character requests a reroll.
///
/// A trailing space is never kept as content; the whole field is replaced
/// with [`random_token`] instead.
pub fn ends_with_reroll(raw: &str) -> bool {
    raw.ends_with(' ')
}

/// Encode an identifier as a canonical lowercase base-36 token.
pub fn encode(mut id: i64) -> String {
    debug_assert!((0..=MAX_ID).contains(&id));
    if id == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while id > 0 {
        out.push(DIGITS[(id % 36) as usize]);
        id /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Decode a token as a base-36 integer, case-insensitively.
pub fn decode(token: &str) -> Result<i64, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }
    if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DecodeError::Malformed);
    }
    match i64::from_str_radix(token, 36) {
        Ok(id) if id <= MAX_ID => Ok(id),
        Ok(_) => Err(DecodeError::OutOfRange),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => Err(DecodeError::OutOfRange),
        Err(_) => Err(DecodeError::Malformed),
    }
}

/// Range validity message for a canonical token, if any.
///
/// Empty input reports no message; it keeps submission disabled through the
/// required-field check instead.
pub fn validity_message(token: &str) -> Option<&'static str> {
    match decode(token) {
        Err(DecodeError::OutOfRange) => Some(RANGE_MESSAGE),
        _ => None,
    }
}

/// Draw a uniform identifier in `[0, MAX_ID]` and encode it.
pub fn random_token() -> String {
    let id = rand::thread_rng().gen_range(0..=MAX_ID);
    encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_strips_and_lowercases() {
        assert_eq!(canonicalize("abc def"), "abcdef");
        assert_eq!(canonicalize("  Hello-World_42 "), "helloworld42");
        assert_eq!(canonicalize("!!!"), "");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_reroll_trigger() {
        assert!(ends_with_reroll("abc "));
        assert!(ends_with_reroll(" "));
        assert!(!ends_with_reroll("abc"));
        assert!(!ends_with_reroll(""));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        for id in [0, 1, 35, 36, 1295, 7_000_000, MAX_ID] {
            assert_eq!(decode(&encode(id)), Ok(id));
        }
    }

    #[test]
    fn test_decode_encode_roundtrip_canonical() {
        for token in ["0", "7", "z", "10", "abcdef", "zik0zj"] {
            assert_eq!(encode(decode(token).unwrap()), token);
        }
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(decode("zik0zj"), Ok(MAX_ID));
        assert_eq!(encode(MAX_ID), "zik0zj");
        assert_eq!(decode("zik0zk"), Err(DecodeError::OutOfRange));
        assert_eq!(decode("zzzzzzzzzzzzzz"), Err(DecodeError::OutOfRange));
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        assert_eq!(decode("ZIK0ZJ"), Ok(MAX_ID));
        assert_eq!(decode("AbCdEf"), decode("abcdef"));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert_eq!(decode(""), Err(DecodeError::Empty));
        assert_eq!(decode("abc def"), Err(DecodeError::Malformed));
        assert_eq!(decode("a-b"), Err(DecodeError::Malformed));
    }

    #[test]
    fn test_validity_message() {
        assert_eq!(validity_message("zik0zk"), Some(RANGE_MESSAGE));
        assert_eq!(validity_message("zik0zj"), None);
        assert_eq!(validity_message("abc"), None);
        assert_eq!(validity_message(""), None);
    }

    #[test]
    fn test_random_token_stays_in_range() {
        for _ in 0..100 {
            let token = random_token();
            let id = decode(&token).unwrap();
            assert!((0..=MAX_ID).contains(&id));
            assert_eq!(encode(id), token);
        }
    }
}
