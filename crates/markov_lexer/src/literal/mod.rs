//! Literal tokenizer: one literal token per run.

use std::io::Read;

use markov_ir::{literal, SharedToken};
use markov_lexer_core::{Segment, Segmenter};
use tracing::{debug, trace};

use crate::{LexError, Tokenizer};

/// Splits text into literal tokens.
///
/// Every maximal run of same-class code points becomes one literal token
/// carrying the run's exact text, so the token values concatenate back to
/// the input. Newlines are emitted as literals too; see
/// [`Terminated`](crate::Terminated) for turning them into `END` tokens.
#[derive(Debug)]
pub struct LiteralTokenizer<R> {
    segmenter: Segmenter<R>,
}

impl<R: Read> LiteralTokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            segmenter: Segmenter::new(reader),
        }
    }

    /// Input offset of the next byte not yet returned in a token.
    pub fn offset(&self) -> u64 {
        self.segmenter.offset()
    }

    pub fn into_inner(self) -> R {
        self.segmenter.into_inner()
    }
}

impl<R: Read> Tokenizer for LiteralTokenizer<R> {
    fn next_token(&mut self) -> Result<Option<SharedToken>, LexError> {
        match self.segmenter.next_segment()? {
            Segment::Run(run) => {
                trace!(offset = run.offset, class = ?run.class, text = ?run.text, "literal");
                Ok(Some(literal(run.text)))
            }
            Segment::Issue(issue) => {
                debug!(offset = issue.offset, kind = ?issue.kind, "undecodable input");
                Err(issue.into())
            }
            Segment::Eof => {
                debug!(offset = self.segmenter.offset(), "end of input");
                Ok(None)
            }
        }
    }
}
