//! Markov IR - token and state types shared by the tokenizer and chain model.
//!
//! This crate contains the data structures every other layer agrees on:
//! - [`Token`]: the open capability trait for chain elements
//! - [`StaticToken`] with the built-in [`START`] and [`END`] sentinels
//! - [`Prefix`]: the fixed-length window of recent tokens (the chain state)
//! - [`Key`]: the collision-free byte encoding of a prefix
//!
//! # Equality
//!
//! Two tokens are equal iff their kinds and identifiers are equal. The value
//! never takes part in equality, hashing, or key encoding. Everything in this
//! crate that compares tokens goes through [`tokens_equal`] or the matching
//! `PartialEq`/`Hash` impls on `dyn Token`.

mod key;
mod prefix;
mod token;

pub use key::Key;
pub use prefix::Prefix;
pub use token::{
    check_token, end, literal, start, tokens_equal, SharedToken, StaticToken, Token, TokenError,
    END, END_KIND, LITERAL_KIND, START, START_KIND,
};
