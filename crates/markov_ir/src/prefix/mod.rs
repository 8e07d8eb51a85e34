//! Fixed-length windows of recent tokens.
//!
//! A [`Prefix`] is the state of a Markov chain: the last `N` tokens seen.
//! It starts out filled with [`START`](crate::START) and slides forward one
//! token at a time via [`Prefix::shift`]. [`Prefix::key`] turns the window
//! into a [`Key`] for transition-table lookups.

use std::ops::Index;

use smallvec::SmallVec;

use crate::key::{Key, SEPARATOR};
use crate::token::{check_token, start, SharedToken, Token};

/// Inline capacity. Chains of order 1-4 never allocate for the window.
const INLINE: usize = 4;

/// The last `N` tokens of a chain, oldest first.
///
/// # Invariant
///
/// The length is fixed at construction and is at least 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix {
    tokens: SmallVec<[SharedToken; INLINE]>,
}

impl Prefix {
    /// Create a prefix of `len` [`START`](crate::START) tokens.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero. A zero-length chain state is a caller bug,
    /// not a recoverable condition.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "prefix length must be positive, got {len}");
        Self {
            tokens: (0..len).map(|_| start()).collect(),
        }
    }

    /// Create a prefix holding exactly `tokens`, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` is empty.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = SharedToken>,
    {
        let tokens: SmallVec<[SharedToken; INLINE]> = tokens.into_iter().collect();
        assert!(!tokens.is_empty(), "prefix length must be positive, got 0");
        for token in &tokens {
            debug_assert!(check_token(token).is_ok(), "invalid token {token:?}");
        }
        Self { tokens }
    }

    /// Drop the oldest token and append `token` as the newest.
    pub fn shift(&mut self, token: SharedToken) {
        debug_assert!(check_token(&token).is_ok(), "invalid token {token:?}");
        self.tokens.rotate_left(1);
        if let Some(last) = self.tokens.last_mut() {
            *last = token;
        }
    }

    /// Encode the window as a lookup key.
    ///
    /// Writes kind, NUL, identifier, NUL for every token. The result is a
    /// fresh allocation; calling this never changes the prefix.
    pub fn key(&self) -> Key {
        let capacity = self
            .tokens
            .iter()
            .map(|t| t.kind().len() + t.identifier().len() + 2)
            .sum();
        let mut bytes = Vec::with_capacity(capacity);
        for token in &self.tokens {
            bytes.extend_from_slice(token.kind().as_bytes());
            bytes.push(SEPARATOR);
            bytes.extend_from_slice(token.identifier().as_bytes());
            bytes.push(SEPARATOR);
        }
        Key::from_bytes(bytes)
    }

    /// Number of tokens in the window.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: a prefix holds at least one token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens, oldest first.
    pub fn as_slice(&self) -> &[SharedToken] {
        &self.tokens
    }

    /// Iterate over the tokens, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, SharedToken> {
        self.tokens.iter()
    }
}

impl Index<usize> for Prefix {
    type Output = SharedToken;

    fn index(&self, index: usize) -> &SharedToken {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Prefix {
    type Item = &'a SharedToken;
    type IntoIter = std::slice::Iter<'a, SharedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
