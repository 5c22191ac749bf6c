//! SearchIndex: the immutable in-memory table queries run against.
//!
//! Built once by [`IndexBuilder`](crate::loader::IndexBuilder) and never
//! mutated afterwards. Alongside the entries it keeps the case-folded keys
//! used by the substring and regex matchers, and an FST over those keys that
//! answers prefix queries without scanning the table.

use crate::{
    error::LoadError,
    types::{IndexEntry, LoadStats},
};
use fst::{
    automaton::{Automaton, Str},
    IntoStreamer, Map, Streamer,
};

pub struct SearchIndex {
    entries: Vec<IndexEntry>,
    /// `entries[i].search_key` lowercased; unique across the index.
    folded: Vec<String>,
    /// Folded key → position in `entries`.
    prefix: Map<Vec<u8>>,
    /// Section ids the entries were loaded from.
    sections: Vec<String>,
    stats: LoadStats,
}

impl SearchIndex {
    /// Assemble an index from entries whose folded keys are already unique.
    pub(crate) fn new(
        entries: Vec<IndexEntry>,
        sections: Vec<String>,
        stats: LoadStats,
    ) -> Result<Self, LoadError> {
        let folded: Vec<String> = entries
            .iter()
            .map(|e| e.search_key.to_lowercase())
            .collect();

        // FST construction needs keys in byte order.
        let mut sorted: Vec<(&[u8], u64)> = folded
            .iter()
            .enumerate()
            .map(|(i, key)| (key.as_bytes(), i as u64))
            .collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let prefix = Map::from_iter(sorted)?;

        Ok(Self {
            entries,
            folded,
            prefix,
            sections,
            stats,
        })
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&IndexEntry> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Section ids (`functions`, `classes`, ...) the entries came from, in
    /// load order. Empty for sources without a section file name.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Total number of link targets across all entries.
    pub fn target_count(&self) -> usize {
        self.entries.iter().map(|e| e.targets.len()).sum()
    }

    /// Case-folded search keys, parallel to [`entries`](Self::entries).
    pub(crate) fn folded_keys(&self) -> &[String] {
        &self.folded
    }

    /// Positions of every entry whose folded key starts with `prefix`, in
    /// table order.
    pub(crate) fn prefix_positions(&self, prefix: &str) -> Vec<usize> {
        let automaton = Str::new(prefix).starts_with();
        let mut stream = self.prefix.search(automaton).into_stream();
        let mut positions = Vec::new();
        while let Some((_, position)) = stream.next() {
            positions.push(position as usize);
        }
        positions.sort_unstable();
        positions
    }
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("entries", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
