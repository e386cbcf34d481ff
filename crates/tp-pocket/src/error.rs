//! Error types for bags, sets, and pocket files.

use std::path::PathBuf;

use thiserror::Error;
use tp_core::{DiceError, DieId};

/// Result type for pocket operations.
pub type PocketResult<T> = Result<T, PocketError>;

/// Errors that can occur while managing a pocket of dice.
#[derive(Debug, Error)]
pub enum PocketError {
    /// A dice-notation expression could not be parsed.
    #[error("invalid dice notation \"{expression}\": {reason}")]
    Notation {
        /// The expression as given.
        expression: String,
        /// What was wrong with it.
        reason: String,
    },

    /// No die in the bag matches the given id or name.
    #[error("no die matches \"{0}\"")]
    DieNotFound(String),

    /// A name or id prefix matches more than one die.
    #[error("\"{query}\" matches {count} dice")]
    AmbiguousDie {
        /// The id prefix or name looked up.
        query: String,
        /// How many dice matched.
        count: usize,
    },

    /// The same die appears twice in a bag snapshot.
    #[error("die {0} appears more than once")]
    DuplicateDie(DieId),

    /// A pocket file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A pocket file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A pocket file was read but its contents are not a valid pocket.
    #[error("malformed pocket file {}: {reason}", path.display())]
    Format {
        /// File that was being loaded.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// A die could not be built or restored.
    #[error(transparent)]
    Dice(#[from] DiceError),
}

impl PocketError {
    pub(crate) fn notation(expression: &str, reason: impl Into<String>) -> Self {
        Self::Notation {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}
