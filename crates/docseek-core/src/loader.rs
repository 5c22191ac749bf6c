//! Loader: turns Doxygen `search/*.js` sources into a [`SearchIndex`].
//!
//! Each source is read with [`literal::parse`](crate::literal::parse) and then
//! decoded record by record. A record has the shape
//!
//! ```text
//! [searchKey, [displayLabel, [href, internalFlag, scopeLabel], ...]]
//! ```
//!
//! Malformed records are skipped with a warning; only an unreadable file or a
//! broken literal aborts a load. Records whose keys match case-insensitively
//! are merged into the first one seen.

use crate::{
    error::LoadError,
    index::SearchIndex,
    literal,
    section,
    types::{IndexEntry, LoadStats, Target},
};
use serde_json::Value;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ---------------------------------------------------------------------------
// Convenience entry points
// ---------------------------------------------------------------------------

/// Load an index from a single in-memory source.
pub fn load_str(src: &str) -> Result<SearchIndex, LoadError> {
    let mut builder = IndexBuilder::new();
    builder.add_source(src, "<memory>")?;
    builder.build()
}

/// Load an index from a single file.
pub fn load_file(path: &Path) -> Result<SearchIndex, LoadError> {
    let mut builder = IndexBuilder::new();
    builder.add_file(path)?;
    builder.build()
}

/// Load every `<section>_<n>.js` file in `dir` into one index.
pub fn load_dir(dir: &Path, section: &str) -> Result<SearchIndex, LoadError> {
    let mut builder = IndexBuilder::new();
    builder.add_dir(dir, section)?;
    builder.build()
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Accumulates entries from one or more sources, enforcing key uniqueness.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    entries: Vec<IndexEntry>,
    /// Folded key → position in `entries`.
    positions: HashMap<String, usize>,
    /// Section ids seen so far, first occurrence order.
    sections: Vec<String>,
    stats: LoadStats,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `src` and add its records. `origin` names the source in warnings.
    pub fn add_source(&mut self, src: &str, origin: &str) -> Result<(), LoadError> {
        let value = literal::parse(src)?;
        let Value::Array(records) = value else {
            return Err(LoadError::NotAnArray {
                origin: origin.to_string(),
            });
        };

        self.stats.files += 1;
        for (position, record) in records.iter().enumerate() {
            self.stats.records += 1;
            match decode_record(record, origin, position) {
                Ok(entry) => self.push(entry),
                Err(reason) => {
                    self.stats.skipped += 1;
                    tracing::warn!(origin, record = position, %reason, "skipping malformed record");
                }
            }
        }
        tracing::debug!(origin, records = records.len(), "source loaded");
        Ok(())
    }

    pub fn add_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let src = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_source(&src, &path.display().to_string())?;
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if let Some((section, _)) = section::split_file_stem(stem) {
            self.note_section(section);
        }
        Ok(())
    }

    /// Add every `<section>_<n>.js` file in `dir`, ordered by `n`.
    pub fn add_dir(&mut self, dir: &Path, section: &str) -> Result<(), LoadError> {
        let files = section_files(dir, section)?;
        if files.is_empty() {
            return Err(LoadError::NoFiles {
                dir: dir.to_path_buf(),
                section: section.to_string(),
            });
        }
        if !section::is_known(section) {
            tracing::warn!(section, "loading a section Doxygen does not normally emit");
        }
        self.note_section(section);
        for file in files {
            self.add_file(&file)?;
        }
        Ok(())
    }

    fn note_section(&mut self, section: &str) {
        if !self.sections.iter().any(|s| s == section) {
            self.sections.push(section.to_string());
        }
    }

    /// Add one entry, merging its targets into an earlier entry with the same
    /// case-folded key.
    pub fn push(&mut self, entry: IndexEntry) {
        let folded = entry.search_key.to_lowercase();
        match self.positions.get(&folded) {
            Some(&existing) => {
                self.stats.merged += 1;
                tracing::debug!(key = %entry.search_key, "merging duplicate key");
                self.entries[existing].targets.extend(entry.targets);
            }
            None => {
                self.positions.insert(folded, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn build(self) -> Result<SearchIndex, LoadError> {
        tracing::info!(entries = self.entries.len(), stats = %self.stats, "index built");
        SearchIndex::new(self.entries, self.sections, self.stats)
    }
}

/// Files in `dir` named `<section>_<n>.js`, sorted by `n`.
fn section_files(dir: &Path, section: &str) -> Result<Vec<PathBuf>, LoadError> {
    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped_dir).join(format!("{}_*.js", glob::Pattern::escape(section)));
    let pattern = pattern.to_string_lossy();

    let mut numbered: Vec<(u32, PathBuf)> = glob::glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .filter_map(|p| {
            let stem = p.file_stem()?.to_str()?;
            // `functions_*` also matches `functions_extra_1`; keep exact families only.
            match section::split_file_stem(stem) {
                Some((s, n)) if s == section => Some((n, p)),
                _ => None,
            }
        })
        .collect();
    numbered.sort_by_key(|(n, _)| *n);
    Ok(numbered.into_iter().map(|(_, p)| p).collect())
}

// ---------------------------------------------------------------------------
// Record decoding
// ---------------------------------------------------------------------------

/// Decode one top-level record, or explain why it is malformed.
fn decode_record(record: &Value, origin: &str, position: usize) -> Result<IndexEntry, String> {
    let fields = record.as_array().ok_or("record is not an array")?;

    let key = fields
        .first()
        .and_then(Value::as_str)
        .ok_or("missing search key")?;
    if key.is_empty() {
        return Err("empty search key".to_string());
    }

    let body = fields
        .get(1)
        .and_then(Value::as_array)
        .ok_or("missing label/targets list")?;
    let label = body
        .first()
        .and_then(Value::as_str)
        .ok_or("missing display label")?;

    let mut targets = Vec::with_capacity(body.len().saturating_sub(1));
    for (i, raw) in body.iter().enumerate().skip(1) {
        match decode_target(raw) {
            Ok(target) => targets.push(target),
            Err(reason) => {
                tracing::warn!(origin, record = position, target = i - 1, %reason, "skipping malformed target");
            }
        }
    }
    if targets.is_empty() {
        return Err(format!("no valid targets for '{key}'"));
    }

    Ok(IndexEntry::new(key, label, targets))
}

fn decode_target(raw: &Value) -> Result<Target, String> {
    let fields = raw.as_array().ok_or("target is not an array")?;
    let href = fields
        .first()
        .and_then(Value::as_str)
        .ok_or("missing url")?;
    if href.is_empty() {
        return Err("empty url".to_string());
    }
    let internal = match fields.get(1) {
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Bool(b)) => *b,
        _ => return Err("missing internal flag".to_string()),
    };
    let scope = fields
        .get(2)
        .and_then(Value::as_str)
        .ok_or("missing scope label")?;
    Ok(Target::from_href(href, internal, scope))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
