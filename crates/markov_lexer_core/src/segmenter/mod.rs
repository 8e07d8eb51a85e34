//! Streaming segmenter over an [`io::Read`] source.
//!
//! The segmenter owns a growable buffer of unread bytes. Each call to
//! [`Segmenter::next_segment`] scans the buffer with a [`RunScanner`],
//! reading more input whenever the scanner reports [`Scan::NeedMore`].
//!
//! # Layout
//!
//! ```text
//! buf: [consumed run bytes..., pending run bytes..., unscanned bytes...]
//!       ^                      ^
//!       0 (= offset `base`)    start
//! ```
//!
//! Consumed bytes are dropped before every read, so the buffer holds at
//! most one pending run plus one read chunk.
//!
//! # Errors
//!
//! Only the underlying reader produces `Err`, plus an `InvalidData` error
//! if the scanner ever hands back a run it did not decode. Undecodable
//! input is returned as [`Segment::Issue`] and halts the segmenter: every
//! later call returns the same issue. A read error also halts it; later calls fail without
//! touching the reader again.

use std::io::{self, Read};

use crate::class::RuneClass;
use crate::scanner::{RunScanner, Scan};

/// Number of bytes requested from the reader per read call.
pub const READ_CHUNK: usize = 8 * 1024;

/// A maximal span of same-class code points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRun {
    /// Class shared by every code point in the run.
    pub class: RuneClass,
    /// Byte offset of the run in the input.
    pub offset: u64,
    /// The exact source text.
    pub text: String,
}

/// Bytes that cannot be decoded as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What is wrong with the bytes.
    pub kind: EncodingIssueKind,
    /// Byte offset of the first offending byte in the input.
    pub offset: u64,
    /// The offending bytes.
    pub bytes: Vec<u8>,
}

/// Kind of undecodable input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodingIssueKind {
    /// Bytes that can never form valid UTF-8, whatever follows.
    InvalidUtf8,
    /// A UTF-8 sequence cut off by the end of input.
    Incomplete,
    /// A NUL code point (`U+0000`). NUL is reserved as the key separator.
    InteriorNull,
}

/// Result of [`Segmenter::next_segment`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Run(RawRun),
    Issue(EncodingIssue),
    /// No more input. Repeats on every later call.
    Eof,
}

/// Why the segmenter stopped producing runs.
#[derive(Clone, Debug)]
enum Halt {
    Issue(EncodingIssue),
    Read { offset: u64 },
}

/// Pull-based run segmenter over any byte source.
pub struct Segmenter<R> {
    reader: R,
    buf: Vec<u8>,
    /// Input offset of `buf[0]`.
    base: u64,
    /// Index of the first byte of the pending run in `buf`.
    start: usize,
    at_eof: bool,
    scanner: RunScanner,
    halted: Option<Halt>,
}

impl<R: Read> Segmenter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            base: 0,
            start: 0,
            at_eof: false,
            scanner: RunScanner::new(),
            halted: None,
        }
    }

    /// Produce the next run, issue, or end of input.
    pub fn next_segment(&mut self) -> io::Result<Segment> {
        match &self.halted {
            Some(Halt::Issue(issue)) => return Ok(Segment::Issue(issue.clone())),
            Some(Halt::Read { offset }) => {
                return Err(io::Error::other(format!(
                    "input halted after a read error at byte {offset}"
                )));
            }
            None => {}
        }
        loop {
            match self.scanner.scan(&self.buf[self.start..], self.at_eof) {
                Scan::NeedMore => {
                    if let Err(e) = self.fill() {
                        self.halted = Some(Halt::Read {
                            offset: self.offset(),
                        });
                        return Err(e);
                    }
                }
                Scan::Run { len, class } => {
                    let offset = self.offset();
                    let text = run_text(&self.buf[self.start..self.start + len], offset)?;
                    let run = RawRun { class, offset, text };
                    self.start += len;
                    return Ok(Segment::Run(run));
                }
                Scan::Issue { kind, at, len } => {
                    let from = self.start + at;
                    let issue = EncodingIssue {
                        kind,
                        offset: self.offset() + at as u64,
                        bytes: self.buf[from..from + len].to_vec(),
                    };
                    self.halted = Some(Halt::Issue(issue.clone()));
                    return Ok(Segment::Issue(issue));
                }
                Scan::Eof => return Ok(Segment::Eof),
            }
        }
    }

    /// Input offset of the next byte not yet returned in a run.
    pub fn offset(&self) -> u64 {
        self.base + self.start as u64
    }

    /// Returns `true` once the segmenter stopped on an issue or read error.
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Drop consumed bytes, then append one read's worth of input.
    ///
    /// A zero-byte read marks end of input. `Interrupted` reads are retried.
    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.buf.drain(..self.start);
            self.base += self.start as u64;
            self.start = 0;
        }
        let filled = self.buf.len();
        self.buf.resize(filled + READ_CHUNK, 0);
        let read = loop {
            match self.reader.read(&mut self.buf[filled..]) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                result => break result,
            }
        };
        let n = match read {
            Ok(n) => n,
            Err(e) => {
                self.buf.truncate(filled);
                return Err(e);
            }
        };
        self.buf.truncate(filled + n);
        if n == 0 {
            self.at_eof = true;
        }
        Ok(())
    }
}

/// Copy out the text of a run the scanner has already decoded.
///
/// Failure means the scanner reported a run over bytes it never validated.
fn run_text(bytes: &[u8], offset: u64) -> io::Result<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_owned()),
        Err(e) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("scanner returned undecoded bytes in run at byte {offset}: {e}"),
        )),
    }
}

impl<R> std::fmt::Debug for Segmenter<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("base", &self.base)
            .field("start", &self.start)
            .field("buffered", &self.buf.len())
            .field("at_eof", &self.at_eof)
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}
