//! Error types for game data loading.

use thiserror::Error;

/// Errors that can occur when loading level layouts or game configuration.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// The layout table has no levels at all.
    #[error("Level table in '{path}' defines no levels")]
    NoLevels { path: String },

    /// Level numbers must run 1, 2, 3, ... in order.
    #[error("Expected level {expected}, found level {found}")]
    NonContiguousLevel { expected: u32, found: u32 },

    /// A level with nothing to collect could never be finished.
    #[error("Level {level} has no fruit to collect")]
    EmptyLevel { level: u32 },
}
