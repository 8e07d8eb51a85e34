//! Low-level text segmentation for Markov chain tokenizers.
//!
//! This crate turns a byte stream into *runs*: maximal spans of code points
//! that share one [`RuneClass`]. It knows nothing about tokens, prefixes or
//! keys; the integration layer (`markov_lexer`) turns runs into tokens and
//! encoding issues into errors.
//!
//! # Layers
//!
//! - [`classify`]: code point to [`RuneClass`]
//! - [`RunScanner`]: pure run-boundary detection over a byte slice, with an
//!   explicit "need more input" state
//! - [`Segmenter`]: drives a [`RunScanner`] over any [`std::io::Read`]

mod class;
mod scanner;
mod segmenter;

pub use class::{classify, RuneClass};
pub use scanner::{RunScanner, Scan};
pub use segmenter::{EncodingIssue, EncodingIssueKind, RawRun, Segment, Segmenter, READ_CHUNK};
