//! Error types raised while loading or exporting rosters.

use thiserror::Error;

/// Errors surfaced by record sources and roster lookups.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid roster file magic: expected 0x{expected:016X}, got 0x{found:016X}")]
    BadMagic { expected: u64, found: u64 },

    #[error("roster file checksum verification failed")]
    ChecksumMismatch,

    #[error("roster file truncated: needed {needed} bytes, found {found}")]
    Truncated { needed: usize, found: usize },

    #[error("roster encoding error: {0}")]
    Encoding(String),

    #[error("no monster labelled '{0}' in roster")]
    UnknownMonster(String),
}

impl From<bincode::Error> for RosterError {
    fn from(err: bincode::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
