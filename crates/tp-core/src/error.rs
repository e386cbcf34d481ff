//! Error types for the dice core.

/// Errors that can occur when building or restoring a die.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A die needs at least one side.
    #[error("invalid side count: {0} (a die needs at least one side)")]
    InvalidSides(u32),

    /// A face value lies outside `1..=sides`.
    #[error("face {face} is out of range for a {sides}-sided die")]
    FaceOutOfRange {
        /// The offending face value.
        face: u32,
        /// Side count of the die it was meant for.
        sides: u32,
    },

    /// Roll history and user history disagree in length.
    #[error("history mismatch: {rolls} rolls but {users} users")]
    HistoryMismatch {
        /// Length of the roll history.
        rolls: usize,
        /// Length of the user history.
        users: usize,
    },

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
