//! Test builders: ergonomic constructors for entries and indexes.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use docseek_core::{load_str, writer, IndexBuilder, IndexEntry, SearchIndex, Target};

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`IndexEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = EntryBuilder::new("initAxis")
///     .target("../d1/d9f/classPlotAxis.html#afb44", "PlotAxis::initAxis()")
///     .external("../d3/daa/classPlotBundle.html", "PlotBundle")
///     .build();
/// ```
pub struct EntryBuilder {
    key: String,
    label: String,
    targets: Vec<Target>,
}

impl EntryBuilder {
    /// Start an entry labelled `label`; its key is the label lowercased.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            key: label.to_lowercase(),
            label,
            targets: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn target(mut self, href: &str, scope: &str) -> Self {
        self.targets.push(Target::from_href(href, true, scope));
        self
    }

    pub fn external(mut self, href: &str, scope: &str) -> Self {
        self.targets.push(Target::from_href(href, false, scope));
        self
    }

    pub fn build(self) -> IndexEntry {
        assert!(!self.targets.is_empty(), "entry {:?} has no targets", self.key);
        IndexEntry::new(self.key, self.label, self.targets)
    }
}

// ---------------------------------------------------------------------------
// Index helpers
// ---------------------------------------------------------------------------

/// Build an index directly from entries, in order.
pub fn index_of(entries: impl IntoIterator<Item = IndexEntry>) -> SearchIndex {
    let mut builder = IndexBuilder::new();
    for entry in entries {
        builder.push(entry);
    }
    builder.build().expect("index builds")
}

/// Load a source string that is known to be well formed.
pub fn load(src: &str) -> SearchIndex {
    load_str(src).expect("fixture loads")
}

/// An index with one entry per key; each key doubles as label and scope.
pub fn index_from_keys(keys: &[String]) -> SearchIndex {
    index_of(keys.iter().enumerate().map(|(i, k)| {
        EntryBuilder::new(k.clone())
            .key(k.clone())
            .target(&format!("page{i}.html#a{i}"), k)
            .build()
    }))
}

/// Serialise entries to `searchData` JS.
pub fn js_of(entries: &[IndexEntry]) -> String {
    writer::to_js(entries)
}
