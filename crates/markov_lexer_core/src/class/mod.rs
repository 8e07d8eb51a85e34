//! Code point classification.
//!
//! | Class | Code points |
//! |-------|-------------|
//! | [`Newline`](RuneClass::Newline) | `U+000A` only |
//! | [`PunctuationOrSpace`](RuneClass::PunctuationOrSpace) | General Category `P*` or the `White_Space` property |
//! | [`Other`](RuneClass::Other) | everything else |
//!
//! `\n` is checked first even though it is also white space. Other line
//! breaking characters (`\r`, VT, FF, NEL, U+2028, U+2029) are plain white
//! space and classify as `PunctuationOrSpace`.

use std::sync::LazyLock;

use regex::Regex;

/// Classification of a single code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RuneClass {
    /// Line feed.
    Newline = 0,
    /// Unicode punctuation or white space.
    PunctuationOrSpace = 1,
    /// Letters, digits, symbols, controls, ...
    Other = 2,
}

/// Unicode General Category `P` (all punctuation subcategories).
#[allow(
    clippy::expect_used,
    reason = "constant pattern, covered by tests"
)]
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\p{P}\z").expect("punctuation pattern is valid"));

/// Classify a code point.
pub fn classify(c: char) -> RuneClass {
    if c == '\n' {
        return RuneClass::Newline;
    }
    if c.is_ascii() {
        return if c.is_whitespace() || u8::try_from(c).is_ok_and(is_ascii_punctuation) {
            RuneClass::PunctuationOrSpace
        } else {
            RuneClass::Other
        };
    }
    if c.is_whitespace() || is_unicode_punctuation(c) {
        RuneClass::PunctuationOrSpace
    } else {
        RuneClass::Other
    }
}

/// ASCII members of General Category `P`.
///
/// Narrower than [`u8::is_ascii_punctuation`]: `$ + < = > ^ \` | ~` are
/// symbols (`S*`), not punctuation.
#[inline]
const fn is_ascii_punctuation(byte: u8) -> bool {
    matches!(
        byte,
        b'!'..=b'#' | b'%'..=b'*' | b','..=b'/' | b':' | b';' | b'?' | b'@' | b'['..=b']' | b'_' | b'{' | b'}'
    )
}

fn is_unicode_punctuation(c: char) -> bool {
    let mut buf = [0u8; 4];
    PUNCTUATION.is_match(c.encode_utf8(&mut buf))
}
