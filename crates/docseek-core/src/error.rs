//! Error types for docseek-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading and assembling a search index.
///
/// Malformed *records* are not errors: the loader skips them with a warning.
/// These variants cover failures that make a whole source unusable.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error: {message}")]
    Syntax { message: String },

    #[error("{origin}: top-level value is not an array")]
    NotAnArray { origin: String },

    #[error("invalid file pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("no '{section}' index files found in {dir}")]
    NoFiles { dir: PathBuf, section: String },

    #[error("failed to build prefix index: {0}")]
    Fst(#[from] fst::Error),
}

/// Errors raised while loading the user configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to write default config to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] config::ConfigError),
}
