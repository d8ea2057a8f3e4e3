//! Query iterators over an [`Index`].
//!
//! Both iterators are lazy, finite, and restartable — each call to
//! [`Index::query`] / [`Index::find`] starts a fresh scan and the index is
//! never mutated underneath one. Results come back in lexicographic
//! lowercase-key order because that is the order the entries are stored in.

use crate::index::Index;
use crate::types::IndexEntry;
use fst::{IntoStreamer, Streamer};

// ---------------------------------------------------------------------------
// Prefix queries
// ---------------------------------------------------------------------------

/// Lazy iterator over entries whose key starts with a given prefix,
/// case-insensitive. Backed by an FST range scan between the lowercased
/// prefix and its byte successor, so matching keys stream out in order
/// without touching the rest of the index.
pub struct PrefixQuery<'idx> {
    stream: fst::map::Stream<'idx>,
    entries: &'idx [IndexEntry],
}

impl<'idx> PrefixQuery<'idx> {
    pub(crate) fn new(index: &'idx Index, prefix: &str) -> Self {
        let lower = prefix.to_lowercase();
        let mut builder = index.map.range().ge(lower.as_bytes());
        if let Some(upper) = prefix_successor(lower.as_bytes()) {
            builder = builder.lt(upper);
        }
        PrefixQuery {
            stream: builder.into_stream(),
            entries: &index.entries,
        }
    }
}

impl<'idx> Iterator for PrefixQuery<'idx> {
    type Item = &'idx IndexEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next().map(|(_, i)| &self.entries[i as usize])
    }
}

/// The smallest byte string greater than every string starting with
/// `prefix`, or `None` when no such bound exists (empty prefix or all
/// `0xff`).
fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut bytes = prefix.to_vec();
    while let Some(last) = bytes.pop() {
        if last < 0xff {
            bytes.push(last + 1);
            return Some(bytes);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Substring queries
// ---------------------------------------------------------------------------

/// Lazy iterator over entries whose key contains a given needle,
/// case-insensitive. Linear scan over the sorted entry table.
pub struct SubstringQuery<'idx> {
    entries: std::slice::Iter<'idx, IndexEntry>,
    needle: String,
}

impl<'idx> SubstringQuery<'idx> {
    pub(crate) fn new(index: &'idx Index, needle: &str) -> Self {
        SubstringQuery {
            entries: index.entries.iter(),
            needle: needle.to_lowercase(),
        }
    }
}

impl<'idx> Iterator for SubstringQuery<'idx> {
    type Item = &'idx IndexEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries
            .by_ref()
            .find(|e| e.key.to_lowercase().contains(&self.needle))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
