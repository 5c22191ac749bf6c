//! docseek-core: Doxygen search index library.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! search/*.js ──► Loader ──► SearchIndex ──► Matcher ──► Renderer
//!                                 │
//!                                 └──► Writer
//! ```
//!
//! Everything runs synchronously on the caller's thread. The index is built
//! once and is read-only afterwards; every query is a pure function of the
//! index and the query string.

pub mod config;
pub mod error;
pub mod index;
pub mod literal;
pub mod loader;
pub mod matcher;
pub mod render;
pub mod section;
pub mod types;
pub mod writer;

pub use error::{ConfigError, LoadError};
pub use index::SearchIndex;
pub use loader::{load_dir, load_file, load_str, IndexBuilder};
pub use matcher::{normalize_query, EmptyQuery, MatchMode, Matcher};
pub use render::{Link, Renderer, ResultGroup};
pub use types::{IndexEntry, LoadStats, Target};
