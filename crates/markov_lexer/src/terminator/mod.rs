//! Newline rewriting.
//!
//! A token whose value starts with a line break stands for one or more
//! newlines. [`Terminated`] replaces it with one `END` token per code point
//! of its value, so `"\n\n"` becomes two `END`s.

use std::rc::Rc;

use markov_ir::{end, SharedToken, Token};
use markov_lexer_core::{classify, RuneClass};
use tracing::trace;

use crate::{LexError, Tokenizer};

/// Wraps a tokenizer, turning newline tokens into `END` tokens.
///
/// All other tokens pass through unchanged, as do errors and end of stream.
#[derive(Debug)]
pub struct Terminated<T> {
    inner: T,
    /// `END` tokens still owed from the last newline token.
    pending: usize,
    end: SharedToken,
}

impl<T> Terminated<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            pending: 0,
            end: end(),
        }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Unwrap the inner tokenizer. Owed `END` tokens are discarded.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Tokenizer> Tokenizer for Terminated<T> {
    fn next_token(&mut self) -> Result<Option<SharedToken>, LexError> {
        if self.pending > 0 {
            self.pending -= 1;
            return Ok(Some(Rc::clone(&self.end)));
        }
        let Some(token) = self.inner.next_token()? else {
            return Ok(None);
        };
        let count = line_breaks(&*token);
        if count == 0 {
            return Ok(Some(token));
        }
        trace!(count, "newline run");
        self.pending = count - 1;
        Ok(Some(Rc::clone(&self.end)))
    }
}

/// Number of `END` tokens `token` expands to, or 0 if it is not a newline.
fn line_breaks(token: &dyn Token) -> usize {
    let value = token.value();
    match value.chars().next() {
        Some(c) if classify(c) == RuneClass::Newline => value.chars().count(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests;
