//! Single-slot temporary signature persistence.
//!
//! Every generation overwrites one well-known temp file, and the later
//! find/promote actions read that file back. There is exactly one current
//! temporary signature at a time; write-then-read is sequential by
//! contract, never concurrent.

use std::path::{Path, PathBuf};

use crate::{Result, Signature};

const TEMP_SIG_FILENAME: &str = "sigdrift_tmp_sig.sig";

/// The well-known location of the current temporary signature.
#[derive(Debug, Clone)]
pub struct TempSlot {
    path: PathBuf,
}

impl TempSlot {
    /// The process-wide default slot under the system temp directory.
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(TEMP_SIG_FILENAME),
        }
    }

    /// A slot at a specific path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `signature` to the slot, replacing whatever was there.
    pub fn save(&self, signature: &Signature) -> Result<()> {
        std::fs::write(&self.path, signature.to_json()?)?;
        Ok(())
    }

    /// Read the signature currently in the slot.
    pub fn load(&self) -> Result<Signature> {
        let json = std::fs::read_to_string(&self.path)?;
        Signature::from_json(&json)
    }
}

impl Default for TempSlot {
    fn default() -> Self {
        Self::new()
    }
}
