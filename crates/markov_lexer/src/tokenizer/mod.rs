//! The pull-based [`Tokenizer`] abstraction.

use std::iter::FusedIterator;

use markov_ir::SharedToken;

use crate::LexError;

/// A source of tokens.
///
/// `Ok(None)` means the stream is exhausted. Once a tokenizer returns an
/// error or `Ok(None)`, callers should stop; implementations in this crate
/// keep returning the same outcome.
pub trait Tokenizer {
    fn next_token(&mut self) -> Result<Option<SharedToken>, LexError>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &mut T {
    fn next_token(&mut self) -> Result<Option<SharedToken>, LexError> {
        (**self).next_token()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn next_token(&mut self) -> Result<Option<SharedToken>, LexError> {
        (**self).next_token()
    }
}

/// A [`Tokenizer`] backed by a closure. See [`from_fn`].
#[derive(Clone)]
pub struct TokenizerFn<F>(F);

/// Adapt a closure into a [`Tokenizer`].
///
/// ```
/// use markov_ir::literal;
/// use markov_lexer::{from_fn, Tokenizer};
///
/// let mut words = vec!["b", "a"];
/// let mut tokenizer = from_fn(move || Ok(words.pop().map(|w| literal(w))));
/// let first = tokenizer.next_token().ok().flatten();
/// assert_eq!(first.map(|t| t.value().into_owned()), Some("a".to_string()));
/// ```
pub fn from_fn<F>(f: F) -> TokenizerFn<F>
where
    F: FnMut() -> Result<Option<SharedToken>, LexError>,
{
    TokenizerFn(f)
}

impl<F> Tokenizer for TokenizerFn<F>
where
    F: FnMut() -> Result<Option<SharedToken>, LexError>,
{
    fn next_token(&mut self) -> Result<Option<SharedToken>, LexError> {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for TokenizerFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TokenizerFn")
    }
}

/// Iterator extension for tokenizers.
pub trait TokenizerExt: Tokenizer + Sized {
    /// Iterate over tokens. Stops after end of stream or the first error.
    fn tokens(self) -> Tokens<Self> {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }
}

impl<T: Tokenizer> TokenizerExt for T {}

/// Iterator returned by [`TokenizerExt::tokens`].
#[derive(Debug)]
pub struct Tokens<T> {
    tokenizer: T,
    done: bool,
}

impl<T> Tokens<T> {
    pub fn into_inner(self) -> T {
        self.tokenizer
    }
}

impl<T: Tokenizer> Iterator for Tokens<T> {
    type Item = Result<SharedToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.tokenizer.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<T: Tokenizer> FusedIterator for Tokens<T> {}

#[cfg(test)]
mod tests;
