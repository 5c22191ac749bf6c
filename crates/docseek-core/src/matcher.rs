//! Query matcher: filters a [`SearchIndex`] by a user-typed query.
//!
//! A key matches a text query when it contains the query as typed (lowercased)
//! or the query encoded the way Doxygen derives search keys from symbol names
//! (see [`normalize_query`]). Typing `~tree` and `_7etree` both find `~Tree`.
//!
//! - **substring** (default): the key contains either form.
//! - **prefix**: the key starts with either form; answered from the index FST.
//! - **regex**: a query written as `/pattern/` is compiled case-insensitively
//!   and matched against the key, whatever the configured mode.
//!
//! Results always keep table order. An empty query yields nothing, or every
//! entry when [`EmptyQuery::All`] is configured. There are no error cases: a
//! bad regex logs a warning and matches nothing.

use crate::{config::SearchConfig, index::SearchIndex, types::IndexEntry};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Substring,
    Prefix,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::Prefix => write!(f, "prefix"),
        }
    }
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "substring" | "sub" => Ok(MatchMode::Substring),
            "prefix" => Ok(MatchMode::Prefix),
            other => Err(format!("unknown match mode: {other}")),
        }
    }
}

/// What an empty query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyQuery {
    #[default]
    None,
    All,
}

impl std::fmt::Display for EmptyQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyQuery::None => write!(f, "none"),
            EmptyQuery::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for EmptyQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(EmptyQuery::None),
            "all" => Ok(EmptyQuery::All),
            other => Err(format!("unknown empty-query policy: {other}")),
        }
    }
}

/// Encode a raw query into search-key form.
///
/// Leading whitespace is dropped and the rest lowercased. ASCII letters,
/// digits and non-ASCII characters pass through; every other character `c`
/// becomes `_` plus its code point in two-digit lowercase hex, matching how
/// the index keys themselves are written (`~` → `_7e`, `::` → `_3a_3a`).
pub fn normalize_query(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim_start().to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || !c.is_ascii() {
            out.push(c);
        } else {
            out.push_str(&format!("_{:02x}", c as u32));
        }
    }
    out
}

/// A parsed query.
enum Query {
    Empty,
    /// Lowercased query as typed, and its encoded search-key form.
    Text { raw: String, encoded: String },
    Pattern(Regex),
    Invalid,
}

impl Query {
    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some(pattern) = trimmed
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'))
        {
            if pattern.is_empty() {
                return Query::Empty;
            }
            return match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => Query::Pattern(re),
                Err(err) => {
                    tracing::warn!(pattern, error = %err, "invalid regex query");
                    Query::Invalid
                }
            };
        }

        let encoded = normalize_query(raw);
        if encoded.is_empty() {
            Query::Empty
        } else {
            Query::Text {
                raw: raw.trim_start().to_lowercase(),
                encoded,
            }
        }
    }
}

/// Stateless filter over a [`SearchIndex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    pub mode: MatchMode,
    pub empty_query: EmptyQuery,
    /// Cap on returned entries; 0 = unlimited.
    pub max_results: usize,
}

impl Matcher {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            mode: config.match_mode,
            empty_query: config.empty_query,
            max_results: config.max_results,
        }
    }

    pub fn with_empty_query(mut self, empty_query: EmptyQuery) -> Self {
        self.empty_query = empty_query;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Return the entries matching `raw`, in table order.
    pub fn search<'a>(&self, index: &'a SearchIndex, raw: &str) -> Vec<&'a IndexEntry> {
        let positions = self.positions(index, raw);
        tracing::debug!(query = raw, mode = %self.mode, hits = positions.len(), "search");
        positions
            .into_iter()
            .filter_map(|p| index.get(p))
            .collect()
    }

    /// Positions (into [`SearchIndex::entries`]) of the entries matching `raw`.
    pub fn positions(&self, index: &SearchIndex, raw: &str) -> Vec<usize> {
        let keys = index.folded_keys();
        let mut positions: Vec<usize> = match Query::parse(raw) {
            Query::Empty => match self.empty_query {
                EmptyQuery::None => Vec::new(),
                EmptyQuery::All => (0..keys.len()).collect(),
            },
            Query::Invalid => Vec::new(),
            Query::Pattern(re) => select(keys, |k| re.is_match(k)),
            Query::Text { raw, encoded } => match self.mode {
                MatchMode::Substring => {
                    select(keys, |k| k.contains(raw.as_str()) || k.contains(encoded.as_str()))
                }
                MatchMode::Prefix => {
                    let mut hits = index.prefix_positions(&encoded);
                    if raw != encoded {
                        hits.extend(index.prefix_positions(&raw));
                        hits.sort_unstable();
                        hits.dedup();
                    }
                    hits
                }
            },
        };
        if self.max_results > 0 {
            positions.truncate(self.max_results);
        }
        positions
    }
}

fn select(keys: &[String], pred: impl Fn(&str) -> bool) -> Vec<usize> {
    keys.iter()
        .enumerate()
        .filter(|(_, k)| pred(k))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
