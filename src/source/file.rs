//! Checksummed binary roster files.
//!
//! File format:
//! - Magic (8 bytes, little-endian u64)
//! - Payload length (4 bytes, little-endian u32)
//! - bincode-encoded list of monster records (variable length)
//! - SHA256 checksum over magic + length + payload (32 bytes)

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::RecordSource;
use crate::constants::{ROSTER_CHECKSUM_LEN, ROSTER_FILE_MAGIC};
use crate::error::{Result, RosterError};
use crate::monster::Roster;

const HEADER_LEN: usize = 8 + 4;

/// A roster stored on disk.
#[derive(Debug, Clone)]
pub struct RosterFile {
    path: PathBuf,
}

impl RosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes `roster` to the file, replacing any previous contents.
    pub fn save(&self, roster: &Roster) -> Result<()> {
        let bytes = encode(roster)?;
        fs::write(&self.path, bytes)?;
        tracing::debug!(path = %self.path.display(), monsters = roster.len(), "roster file written");
        Ok(())
    }
}

impl RecordSource for RosterFile {
    fn describe(&self) -> String {
        format!("roster file {}", self.path.display())
    }

    fn load(&self) -> Result<Roster> {
        let bytes = fs::read(&self.path)?;
        decode(&bytes)
    }
}

/// Serializes a roster into the file format.
pub fn encode(roster: &Roster) -> Result<Vec<u8>> {
    let data = bincode::serialize(roster)?;
    let data_len = u32::try_from(data.len())
        .map_err(|_| RosterError::Encoding("roster too large for file format".to_string()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + data.len() + ROSTER_CHECKSUM_LEN);
    bytes.extend_from_slice(&ROSTER_FILE_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(&data);

    let checksum = Sha256::digest(&bytes);
    bytes.extend_from_slice(&checksum);

    Ok(bytes)
}

/// Parses and verifies a roster from the file format.
///
/// Returns an error if:
/// - The input is shorter than its header or declared payload
/// - The magic is incorrect
/// - The checksum verification fails
/// - The payload cannot be deserialized
pub fn decode(bytes: &[u8]) -> Result<Roster> {
    if bytes.len() < HEADER_LEN {
        return Err(RosterError::Truncated {
            needed: HEADER_LEN,
            found: bytes.len(),
        });
    }

    let (magic_bytes, rest) = bytes.split_at(8);
    let (length_bytes, rest) = rest.split_at(4);

    let magic = u64::from_le_bytes(magic_bytes.try_into().map_err(|_| truncated(bytes))?);
    if magic != ROSTER_FILE_MAGIC {
        return Err(RosterError::BadMagic {
            expected: ROSTER_FILE_MAGIC,
            found: magic,
        });
    }

    let data_len = u32::from_le_bytes(length_bytes.try_into().map_err(|_| truncated(bytes))?) as usize;
    let needed = HEADER_LEN + data_len + ROSTER_CHECKSUM_LEN;
    if bytes.len() < needed {
        return Err(RosterError::Truncated {
            needed,
            found: bytes.len(),
        });
    }

    let (data, rest) = rest.split_at(data_len);
    let stored_checksum = &rest[..ROSTER_CHECKSUM_LEN];

    let computed_checksum = Sha256::digest(&bytes[..HEADER_LEN + data_len]);
    if stored_checksum != computed_checksum.as_slice() {
        return Err(RosterError::ChecksumMismatch);
    }

    Ok(bincode::deserialize(data)?)
}

fn truncated(bytes: &[u8]) -> RosterError {
    RosterError::Truncated {
        needed: HEADER_LEN,
        found: bytes.len(),
    }
}
