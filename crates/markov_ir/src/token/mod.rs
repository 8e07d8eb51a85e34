//! Tokens: the elements of a Markov chain.
//!
//! A token is usually a word or a run of punctuation and white space, but
//! any type implementing [`Token`] can take part in a chain (grammatical
//! tags, synthetic markers, ...). The built-in tokens live in reserved
//! single-letter kinds:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | `l`  | literal text ([`literal`]) |
//! | `s`  | start of text ([`START`]) |
//! | `e`  | end of a line ([`END`]) |
//!
//! Custom kinds should avoid single ASCII letters and digits so they never
//! collide with a future built-in kind.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Kind used by literal tokens.
pub const LITERAL_KIND: &str = "l";

/// Reserved kind of the [`START`] sentinel.
pub const START_KIND: &str = "s";

/// Reserved kind of the [`END`] sentinel.
pub const END_KIND: &str = "e";

/// One element of a Markov chain.
///
/// # Contract
///
/// - [`kind()`](Self::kind) is non-empty, contains no NUL byte, and is the
///   same for every token of one type.
/// - [`identifier()`](Self::identifier) contains no NUL byte and never
///   changes for the lifetime of the token.
/// - All three accessors are pure.
///
/// NUL is reserved as the separator in [`Key`](crate::Key) encoding. A
/// token breaking the contract can make two different prefixes share a key.
/// Use [`check_token`] to validate tokens from untrusted sources.
pub trait Token: fmt::Debug {
    /// Namespace of the token.
    fn kind(&self) -> &str;

    /// Equality key within the token's kind.
    fn identifier(&self) -> &str;

    /// Text emitted when a chain renders this token.
    ///
    /// Usually the identifier, but may be generated on demand.
    fn value(&self) -> Cow<'_, str>;
}

/// Shared handle to a token of any kind.
///
/// Tokenizers and prefixes are single-owner (see the crate docs), so the
/// handle is reference counted without atomics.
///
/// Compare handles with `==` or [`tokens_equal`]. `assert_eq!` does not
/// compile on two `SharedToken`s, since the `PartialEq` impl lives on
/// `dyn Token` (rust-lang/rust#31740).
pub type SharedToken = Rc<dyn Token>;

/// Returns `true` if `a` and `b` have the same kind and identifier.
///
/// The value is never consulted. Works for any mix of built-in and custom
/// tokens.
pub fn tokens_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Token + ?Sized,
    B: Token + ?Sized,
{
    a.kind() == b.kind() && a.identifier() == b.identifier()
}

/// Validates the [`Token`] contract for `token`.
pub fn check_token<T: Token + ?Sized>(token: &T) -> Result<(), TokenError> {
    check_fields(token.kind(), token.identifier())
}

fn check_fields(kind: &str, identifier: &str) -> Result<(), TokenError> {
    if kind.is_empty() {
        return Err(TokenError::EmptyKind);
    }
    if let Some(offset) = memchr::memchr(0, kind.as_bytes()) {
        return Err(TokenError::NulInKind { offset });
    }
    if let Some(offset) = memchr::memchr(0, identifier.as_bytes()) {
        return Err(TokenError::NulInIdentifier { offset });
    }
    Ok(())
}

/// Violation of the [`Token`] contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The kind is the empty string.
    #[error("token kind must not be empty")]
    EmptyKind,
    /// The kind contains a NUL byte.
    #[error("token kind contains a NUL byte at offset {offset}")]
    NulInKind { offset: usize },
    /// The identifier contains a NUL byte.
    #[error("token identifier contains a NUL byte at offset {offset}")]
    NulInIdentifier { offset: usize },
}

impl PartialEq for dyn Token + '_ {
    fn eq(&self, other: &Self) -> bool {
        tokens_equal(self, other)
    }
}

impl Eq for dyn Token + '_ {}

impl Hash for dyn Token + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.identifier().hash(state);
    }
}

impl<T: Token + ?Sized> Token for Rc<T> {
    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn identifier(&self) -> &str {
        (**self).identifier()
    }

    fn value(&self) -> Cow<'_, str> {
        (**self).value()
    }
}

impl<T: Token + ?Sized> Token for Box<T> {
    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn identifier(&self) -> &str {
        (**self).identifier()
    }

    fn value(&self) -> Cow<'_, str> {
        (**self).value()
    }
}

/// A token whose identifier and value are the same fixed text.
///
/// Covers literal words and every other "static text" token. Derived
/// equality compares kind and text, which is exactly [`tokens_equal`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StaticToken {
    kind: Cow<'static, str>,
    text: Cow<'static, str>,
}

impl StaticToken {
    /// Create a token from static strings.
    ///
    /// Used for the built-in sentinels; does not check the contract.
    pub const fn from_static(kind: &'static str, text: &'static str) -> Self {
        Self {
            kind: Cow::Borrowed(kind),
            text: Cow::Borrowed(text),
        }
    }

    /// Create a token of `kind` whose identifier and value are `text`.
    ///
    /// # Contract
    ///
    /// `kind` must be non-empty and neither argument may contain NUL.
    /// Checked in debug builds only; use [`try_new`](Self::try_new) for
    /// input that is not known to be valid.
    pub fn new(kind: impl Into<Cow<'static, str>>, text: impl Into<Cow<'static, str>>) -> Self {
        let kind = kind.into();
        let text = text.into();
        debug_assert!(
            check_fields(&kind, &text).is_ok(),
            "invalid token {kind:?}/{text:?}: {:?}",
            check_fields(&kind, &text)
        );
        Self { kind, text }
    }

    /// Like [`new`](Self::new), but reports contract violations as errors.
    pub fn try_new(
        kind: impl Into<Cow<'static, str>>,
        text: impl Into<Cow<'static, str>>,
    ) -> Result<Self, TokenError> {
        let kind = kind.into();
        let text = text.into();
        check_fields(&kind, &text)?;
        Ok(Self { kind, text })
    }

    /// Create a literal token. Same as `StaticToken::new(LITERAL_KIND, text)`.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(LITERAL_KIND, text)
    }

    /// Wrap the token in a [`SharedToken`].
    pub fn into_shared(self) -> SharedToken {
        Rc::new(self)
    }
}

impl Token for StaticToken {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn identifier(&self) -> &str {
        &self.text
    }

    fn value(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.as_ref() {
            START_KIND if self.text.is_empty() => f.write_str("START"),
            END_KIND if self.text.is_empty() => f.write_str("END"),
            _ => write!(f, "{}{:?}", self.kind, self.text),
        }
    }
}

/// Sentinel used to fill a fresh [`Prefix`](crate::Prefix).
///
/// The empty text can never be produced by a tokenizer, and the kind is
/// reserved, so `START` never equals real content.
pub static START: StaticToken = StaticToken::from_static(START_KIND, "");

/// Sentinel emitted in place of each newline.
pub static END: StaticToken = StaticToken::from_static(END_KIND, "");

/// Shared literal token for `text`.
pub fn literal(text: impl Into<Cow<'static, str>>) -> SharedToken {
    StaticToken::literal(text).into_shared()
}

/// Shared handle to [`START`].
pub fn start() -> SharedToken {
    START.clone().into_shared()
}

/// Shared handle to [`END`].
pub fn end() -> SharedToken {
    END.clone().into_shared()
}

#[cfg(test)]
mod tests;
