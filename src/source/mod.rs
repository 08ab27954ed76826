//! Record sources supplying the roster to rank.
//!
//! The built-in table and the binary roster file are interchangeable behind
//! [`RecordSource`].

pub mod builtin;
pub mod file;

pub use builtin::BuiltinRoster;
pub use file::RosterFile;

use crate::error::Result;
use crate::monster::Roster;

/// Anything that can hand out an ordered roster.
pub trait RecordSource {
    /// Short description for logs and report headers.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Roster>;
}

/// Loads from `source`, falling back to an empty roster on any failure.
pub fn load_or_empty(source: &dyn RecordSource) -> Roster {
    match source.load() {
        Ok(roster) => {
            tracing::debug!(source = %source.describe(), monsters = roster.len(), "roster loaded");
            roster
        }
        Err(err) => {
            tracing::warn!(
                source = %source.describe(),
                error = %err,
                "could not load roster, continuing with no monsters"
            );
            Roster::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    struct Broken;

    impl RecordSource for Broken {
        fn describe(&self) -> String {
            "broken".to_string()
        }

        fn load(&self) -> Result<Roster> {
            Err(RosterError::ChecksumMismatch)
        }
    }

    #[test]
    fn test_load_or_empty_falls_back() {
        assert!(load_or_empty(&Broken).is_empty());
    }

    #[test]
    fn test_load_or_empty_passes_through() {
        assert_eq!(load_or_empty(&BuiltinRoster).len(), 8);
    }
}
