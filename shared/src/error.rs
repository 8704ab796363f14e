use std::fmt;

/// Errors surfaced by the spin engine to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    /// Too few options, or an option that fails validation. No state was mutated.
    InvalidInput(String),
    /// A spin is already in flight on this wheel. Hosts treat this as a no-op.
    AlreadySpinning,
    /// Elimination was requested against a stale or minimal option set.
    EliminationNoop,
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::AlreadySpinning => write!(f, "A spin is already in progress"),
            Self::EliminationNoop => write!(f, "Nothing to eliminate"),
        }
    }
}

impl std::error::Error for WheelError {}

/// Failures of a persistence backend. These never escape the `ProgressStore`.
#[derive(Debug)]
pub enum StorageError {
    Unavailable(String),
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            Self::Corrupt(msg) => write!(f, "Stored data is corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err.to_string())
    }
}
