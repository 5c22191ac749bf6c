//! Core types for docseek-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the [`IndexEntry`] record, its [`Target`] links, and the
//! [`LoadStats`] summary produced by the loader.

use serde::Serialize;

/// One hyperlink target of an index entry (one overload or occurrence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    /// Page path relative to the search page, without the fragment.
    pub url: String,
    /// In-page fragment without the leading `#`.
    ///
    /// `None` when the href carried no `#` at all; `Some("")` when it ended
    /// with a bare `#`. Keeping the distinction lets the writer reproduce the
    /// original href exactly.
    pub anchor: Option<String>,
    /// Enclosing namespace/class context, e.g. `ComPWA::Logging::init()`.
    pub scope: String,
    /// `true` when the page belongs to this documentation set, `false` for an
    /// external tag-file reference.
    pub internal: bool,
}

impl Target {
    /// Build a target from a raw href, splitting off the fragment at the
    /// first `#`.
    pub fn from_href(href: &str, internal: bool, scope: impl Into<String>) -> Self {
        let (url, anchor) = match href.split_once('#') {
            Some((url, anchor)) => (url.to_string(), Some(anchor.to_string())),
            None => (href.to_string(), None),
        };
        Self {
            url,
            anchor,
            scope: scope.into(),
            internal,
        }
    }

    /// The link this target points at: `url` or `url#anchor`.
    pub fn href(&self) -> String {
        match &self.anchor {
            Some(anchor) => format!("{}#{}", self.url, anchor),
            None => self.url.clone(),
        }
    }
}

/// A single top-level record of the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Normalised lowercase token the matcher runs against.
    pub search_key: String,
    /// Human-readable symbol name.
    pub display_label: String,
    /// Every place the symbol is documented, in table order. Never empty.
    pub targets: Vec<Target>,
}

impl IndexEntry {
    pub fn new(
        search_key: impl Into<String>,
        display_label: impl Into<String>,
        targets: Vec<Target>,
    ) -> Self {
        Self {
            search_key: search_key.into(),
            display_label: display_label.into(),
            targets,
        }
    }
}

/// Counters collected while building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Source files (or in-memory sources) consumed.
    pub files: usize,
    /// Top-level records seen, valid or not.
    pub records: usize,
    /// Records dropped because they were malformed.
    pub skipped: usize,
    /// Records folded into an earlier entry with the same key.
    pub merged: usize,
}

impl std::fmt::Display for LoadStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files, {} records ({} skipped, {} merged)",
            self.files, self.records, self.skipped, self.merged
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
