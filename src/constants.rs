// Combat constants
/// Defense is a percentage of incoming damage absorbed.
pub const DEFENSE_SCALE: i64 = 100;

// Roster file constants
pub const ROSTER_FILE_MAGIC: u64 = 0x4253544941525900; // "BSTIARY\0" in hex
pub const ROSTER_CHECKSUM_LEN: usize = 32;

// Environment
pub const ROSTER_PATH_ENV: &str = "BESTIARY_ROSTER";
