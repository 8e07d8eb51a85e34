//! Tokenizer errors.
//!
//! Encoding problems arrive from `markov_lexer_core` as plain
//! [`EncodingIssue`] data and are converted here, keeping the core crate
//! free of error plumbing.

use std::io;

use markov_lexer_core::{EncodingIssue, EncodingIssueKind};

/// Error produced while pulling tokens.
///
/// After any error the consumer should stop asking for tokens; tokenizers
/// keep failing rather than resume.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// The byte source failed. Passed through unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Bytes that can never form valid UTF-8.
    #[error("invalid UTF-8 at byte {offset}: {bytes:02x?}")]
    InvalidUtf8 { offset: u64, bytes: Vec<u8> },

    /// A UTF-8 sequence cut off by the end of input.
    #[error("incomplete UTF-8 sequence at end of input (byte {offset}): {bytes:02x?}")]
    IncompleteUtf8 { offset: u64, bytes: Vec<u8> },

    /// A NUL character in the input. NUL is reserved for key encoding.
    ///
    /// This is valid UTF-8 rejected on purpose: a literal containing NUL
    /// could forge field boundaries inside a [`Key`](markov_ir::Key). Like
    /// the other encoding errors it discards the run in progress.
    #[error("NUL character at byte {offset}")]
    InteriorNull { offset: u64 },

    /// Failure reported by a custom tokenizer stage.
    #[error("{0}")]
    Other(String),
}

impl LexError {
    /// Byte offset of the offending input, for encoding errors.
    pub fn offset(&self) -> Option<u64> {
        match self {
            LexError::InvalidUtf8 { offset, .. }
            | LexError::IncompleteUtf8 { offset, .. }
            | LexError::InteriorNull { offset } => Some(*offset),
            LexError::Io(_) | LexError::Other(_) => None,
        }
    }

    /// Returns `true` if the input itself is not valid text.
    pub fn is_encoding(&self) -> bool {
        self.offset().is_some()
    }
}

impl From<EncodingIssue> for LexError {
    fn from(issue: EncodingIssue) -> Self {
        let EncodingIssue {
            kind,
            offset,
            bytes,
        } = issue;
        match kind {
            EncodingIssueKind::InvalidUtf8 => LexError::InvalidUtf8 { offset, bytes },
            EncodingIssueKind::Incomplete => LexError::IncompleteUtf8 { offset, bytes },
            EncodingIssueKind::InteriorNull => LexError::InteriorNull { offset },
        }
    }
}
