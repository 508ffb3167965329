//! Errors for everything layered over the tree.

use thiserror::Error;

/// Failures reported by the command and session layer. The tree itself never errors; it answers
/// with `bool`s.
#[derive(Error, Debug)]
pub enum Error {
    /// The key is already in the tree.
    #[error("Cannot add {key}. This element already exists in the tree.")]
    DuplicateKey {
        /// The rejected key.
        key: i64,
        /// The keys visited down to and including the existing node.
        path: Vec<i64>,
    },

    /// The key isn't in the tree.
    #[error("Cannot delete {0}. This element is not in the tree.")]
    NotFound(i64),

    /// The text couldn't be turned into a command.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Speeds have to be positive and finite.
    #[error("Invalid speed {0}: must be a finite number greater than zero")]
    InvalidSpeed(f64),

    /// The config wasn't valid TOML or had the wrong shape.
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
