//! Byte-string keys derived from prefixes.

use std::borrow::Borrow;
use std::fmt;

/// Separator written after every kind and identifier in a [`Key`].
///
/// Tokens may not contain NUL, so the separator never appears inside a field.
pub(crate) const SEPARATOR: u8 = 0x00;

/// Collision-free encoding of a [`Prefix`](crate::Prefix).
///
/// Layout, repeated for every token in order:
///
/// ```text
/// [kind bytes..., 0x00, identifier bytes..., 0x00]
/// ```
///
/// Two keys are equal iff the prefixes they were built from are equal
/// element by element. A key owns its bytes and outlives the prefix.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Vec<u8>);

impl Key {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the key, returning the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the encoding in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for keys built from a prefix (every token adds two separators).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for Key {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Key> for Vec<u8> {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key(\"{}\")", self.0.escape_ascii())
    }
}
