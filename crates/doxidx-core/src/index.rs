//! Index — the merged, immutable symbol table built from one or more
//! fragments.
//!
//! Entries are held sorted by lowercase key next to an [`fst::Map`] from
//! lowercase key to entry position. The index is built once per load and
//! never mutated; queries share it by reference.
//!
//! # Merge policy
//!
//! Fragments are merged in load order and the last fragment wins on
//! duplicate keys (compared case-insensitively). The generated data carries
//! no merge rule of its own — regenerated files supersede wholesale — so
//! load order is the only sensible tie-break.

use crate::fragment::Fragment;
use crate::query::{PrefixQuery, SubstringQuery};
use crate::types::IndexEntry;
use std::collections::HashMap;

/// The merged search index. Construct with [`Index::load`] or
/// [`Index::from_entries`]; query with [`Index::query`] / [`Index::find`].
#[derive(Debug)]
pub struct Index {
    /// Sorted by `keys` order; `keys[i]` is the lowercase form of
    /// `entries[i].key`.
    pub(crate) entries: Vec<IndexEntry>,
    pub(crate) map: fst::Map<Vec<u8>>,
}

impl Index {
    /// Merge fragments into an index, last-loaded fragment winning on
    /// duplicate keys.
    pub fn load<I>(fragments: I) -> Index
    where
        I: IntoIterator<Item = Fragment>,
    {
        Index::from_entries(fragments.into_iter().flat_map(|f| f.entries))
    }

    /// Build an index from raw entries, deduplicating by lowercase key with
    /// the same last-wins rule as [`Index::load`].
    pub fn from_entries<I>(entries: I) -> Index
    where
        I: IntoIterator<Item = IndexEntry>,
    {
        let mut by_key: HashMap<String, IndexEntry> = HashMap::new();
        for entry in entries {
            by_key.insert(entry.key.to_lowercase(), entry);
        }

        let mut keyed: Vec<(String, IndexEntry)> = by_key.into_iter().collect();
        keyed.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut builder = fst::MapBuilder::memory();
        for (i, (key, _)) in keyed.iter().enumerate() {
            builder
                .insert(key, i as u64)
                .expect("keys are sorted and deduplicated before the fst build");
        }
        let map = builder.into_map();

        let entries: Vec<IndexEntry> = keyed.into_iter().map(|(_, e)| e).collect();
        tracing::debug!(entries = entries.len(), "index built");

        Index { entries, map }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact key lookup, case-insensitive.
    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.map
            .get(key.to_lowercase())
            .map(|i| &self.entries[i as usize])
    }

    /// All entries in lexicographic key order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    /// Entries whose key starts with `prefix`, case-insensitive, in
    /// lexicographic key order. The iterator is lazy and finite; calling
    /// `query` again restarts from the beginning. An empty prefix yields
    /// every entry exactly once.
    pub fn query(&self, prefix: &str) -> PrefixQuery<'_> {
        PrefixQuery::new(self, prefix)
    }

    /// Entries whose key contains `needle`, case-insensitive, in
    /// lexicographic key order. Linear scan; same laziness and restart
    /// semantics as [`Index::query`].
    pub fn find(&self, needle: &str) -> SubstringQuery<'_> {
        SubstringQuery::new(self, needle)
    }
}

impl<'idx> IntoIterator for &'idx Index {
    type Item = &'idx IndexEntry;
    type IntoIter = std::slice::Iter<'idx, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
