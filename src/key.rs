//! Byte keys and corpus views.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

/// An immutable sequence of bytes used as a trie key.
///
/// Keys sliced out of a corpus borrow from it; keys rebuilt while walking a
/// trie own their bytes. Equality, ordering and hashing are structural, so a
/// borrowed and an owned key with the same bytes compare equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteKey<'a>(Cow<'a, [u8]>);

impl<'a> ByteKey<'a> {
    /// Borrow `bytes` as a key.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(Cow::Borrowed(bytes))
    }

    /// Take ownership of `bytes` as a key.
    pub fn owned(bytes: Vec<u8>) -> ByteKey<'static> {
        ByteKey(Cow::Owned(bytes))
    }

    /// The empty key.
    pub const fn empty() -> Self {
        Self(Cow::Borrowed(&[]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Detach the key from whatever it borrows.
    pub fn into_owned(self) -> ByteKey<'static> {
        ByteKey(Cow::Owned(self.0.into_owned()))
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0.into_owned()
    }
}

impl Deref for ByteKey<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteKey<'_> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<'a> From<&'a [u8]> for ByteKey<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteKey<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for ByteKey<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        ByteKey::owned(bytes)
    }
}

impl fmt::Debug for ByteKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteKey({:?})", self.as_bytes())
    }
}

/// A borrowed view of the training input.
///
/// The view is only ever sliced into [`ByteKey`]s; the underlying bytes are
/// never copied.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CorpusView<'a> {
    bytes: &'a [u8],
}

impl<'a> CorpusView<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The substring `corpus[start..=end]` as a key.
    ///
    /// # Panics
    /// Panics if `start > end` or `end >= self.len()`.
    pub fn key(&self, start: usize, end: usize) -> ByteKey<'a> {
        ByteKey::new(&self.bytes[start..=end])
    }

    /// Split the view into consecutive chunks of at most `len` bytes.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn chunks(&self, len: usize) -> impl Iterator<Item = CorpusView<'a>> + 'a {
        self.bytes.chunks(len).map(CorpusView::new)
    }

    /// Number of contiguous substrings (`n * (n + 1) / 2`).
    pub fn substring_count(&self) -> u64 {
        let n = self.bytes.len() as u64;
        n * (n + 1) / 2
    }
}

impl<'a> From<&'a [u8]> for CorpusView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for CorpusView<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for CorpusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorpusView").field("len", &self.len()).finish()
    }
}
