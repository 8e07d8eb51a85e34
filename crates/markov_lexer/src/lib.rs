//! Tokenizer pipeline for Markov chain text models.
//!
//! Integration layer over `markov_lexer_core`: raw runs become literal
//! tokens, encoding issues become [`LexError`]s, and newlines become
//! [`END`](markov_ir::END) terminators.
//!
//! ```text
//! io::Read -> Segmenter -> LiteralTokenizer -> Terminated -> consumer
//!             (runs)       (literal tokens)    (literals + END)
//! ```
//!
//! [`tokenize`] builds the standard pipeline. Every stage implements
//! [`Tokenizer`], so custom stages (taggers, filters) slot in anywhere.
//!
//! # Logging
//!
//! Emitted tokens are logged at `trace`, encoding issues and end of input at
//! `debug`. Call [`init_tracing`] and set `RUST_LOG=markov_lexer=trace` to
//! see them.

use std::io::Read;
use std::sync::Once;

mod lex_error;
mod literal;
mod terminator;
mod tokenizer;

pub use lex_error::LexError;
pub use literal::LiteralTokenizer;
pub use terminator::Terminated;
pub use tokenizer::{from_fn, Tokenizer, TokenizerExt, TokenizerFn, Tokens};

/// The standard pipeline returned by [`tokenize`].
pub type TextTokenizer<R> = Terminated<LiteralTokenizer<R>>;

/// Tokenize `reader` into literals and [`END`](markov_ir::END) terminators.
///
/// Concatenating the values of the literal tokens (with one `"\n"` per
/// `END`) reproduces the input.
#[tracing::instrument(level = "trace", skip_all)]
pub fn tokenize<R: Read>(reader: R) -> TextTokenizer<R> {
    Terminated::new(LiteralTokenizer::new(reader))
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times, and a no-op when
/// another global subscriber is already installed.
/// Enable with `RUST_LOG=markov_lexer=debug` or `RUST_LOG=markov_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
