//! Pure run scanner.
//!
//! [`RunScanner`] finds the end of the next run in a byte slice without
//! owning the bytes. The caller keeps the unread bytes, calls
//! [`scan()`](RunScanner::scan), and reacts to the [`Scan`] result:
//!
//! - [`Scan::NeedMore`]: append more input (same slice start) and scan again
//! - [`Scan::Run`]: consume `len` bytes
//! - [`Scan::Issue`]: the bytes at `at` can never become valid text
//! - [`Scan::Eof`]: nothing left
//!
//! The scanner remembers how far into the pending run it has decoded, so a
//! run split over many reads is decoded once.

use crate::class::{classify, RuneClass};
use crate::segmenter::EncodingIssueKind;

/// Result of one [`RunScanner::scan`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// The run boundary (or a complete code point) lies beyond the given bytes.
    NeedMore,
    /// A complete run of `len` bytes at the start of the slice.
    Run { len: usize, class: RuneClass },
    /// Bytes `at..at + len` of the slice cannot be decoded.
    Issue {
        kind: EncodingIssueKind,
        at: usize,
        len: usize,
    },
    /// The slice is empty and no more input will arrive.
    Eof,
}

/// Incremental run-boundary detection.
#[derive(Clone, Debug, Default)]
pub struct RunScanner {
    /// Bytes of the pending run already decoded.
    scanned: usize,
    /// Class of the pending run, `None` before its first code point.
    class: Option<RuneClass>,
}

impl RunScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `unread` for the next run.
    ///
    /// `at_eof` tells the scanner that `unread` is all the input there will
    /// ever be. Between a `NeedMore` and the next call, `unread` must keep its
    /// start and only grow at the end.
    ///
    /// An issue found while a run is pending takes precedence: the pending
    /// run is not reported. Repeating the call with the same bytes repeats
    /// the issue.
    pub fn scan(&mut self, unread: &[u8], at_eof: bool) -> Scan {
        debug_assert!(
            self.scanned <= unread.len(),
            "unread bytes shrank below the scanned run"
        );
        loop {
            let rest = &unread[self.scanned..];
            let Some(decoded) = decode_front(rest) else {
                return match self.class {
                    Some(class) if at_eof => self.take_run(class),
                    None if at_eof => Scan::Eof,
                    _ => Scan::NeedMore,
                };
            };
            match decoded {
                Decoded::Char('\0', _) => {
                    return Scan::Issue {
                        kind: EncodingIssueKind::InteriorNull,
                        at: self.scanned,
                        len: 1,
                    };
                }
                Decoded::Char(c, width) => {
                    let class = classify(c);
                    match self.class {
                        Some(current) if current != class => return self.take_run(current),
                        Some(_) => {}
                        None => self.class = Some(class),
                    }
                    self.scanned += width;
                }
                Decoded::Truncated if at_eof => {
                    return Scan::Issue {
                        kind: EncodingIssueKind::Incomplete,
                        at: self.scanned,
                        len: rest.len(),
                    };
                }
                Decoded::Truncated => return Scan::NeedMore,
                Decoded::Invalid(len) => {
                    return Scan::Issue {
                        kind: EncodingIssueKind::InvalidUtf8,
                        at: self.scanned,
                        len,
                    };
                }
            }
        }
    }

    /// Bytes of the pending run decoded so far.
    pub fn pending(&self) -> usize {
        self.scanned
    }

    fn take_run(&mut self, class: RuneClass) -> Scan {
        let len = self.scanned;
        self.scanned = 0;
        self.class = None;
        Scan::Run { len, class }
    }
}

/// Outcome of decoding the first code point of a byte slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Decoded {
    /// A complete code point and its encoded width.
    Char(char, usize),
    /// A valid but incomplete sequence; more bytes may complete it.
    Truncated,
    /// The first `n` bytes can never start a valid sequence.
    Invalid(usize),
}

/// Returns the number of bytes in the UTF-8 sequence starting with `byte`.
///
/// Continuation and other invalid leading bytes report 1; the decoder then
/// rejects them.
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Decode the first code point of `bytes`, or `None` if `bytes` is empty.
fn decode_front(bytes: &[u8]) -> Option<Decoded> {
    let &first = bytes.first()?;
    if first.is_ascii() {
        return Some(Decoded::Char(char::from(first), 1));
    }
    let width = utf8_char_width(first);
    let end = width.min(bytes.len());
    let decoded = match std::str::from_utf8(&bytes[..end]) {
        Ok(s) if end == width => s
            .chars()
            .next()
            .map_or(Decoded::Invalid(1), |c| Decoded::Char(c, width)),
        Ok(_) => Decoded::Truncated,
        Err(e) => match e.error_len() {
            None => Decoded::Truncated,
            Some(n) => Decoded::Invalid(n),
        },
    };
    Some(decoded)
}
