use super::RecordSource;
use crate::error::Result;
use crate::monster::{builtin_roster, Roster};

/// The literal eight-monster table compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRoster;

impl RecordSource for BuiltinRoster {
    fn describe(&self) -> String {
        "built-in roster".to_string()
    }

    fn load(&self) -> Result<Roster> {
        Ok(builtin_roster())
    }
}
