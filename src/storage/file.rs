use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{decode_record, encode_record, IdentityStore, SlotError, SlotResult, SLOT_KEY};
use crate::identity::Identity;

/// File-backed identity slot: `<state_dir>/sentinel_user.json`.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    path: PathBuf,
}

impl FileSlotStore {
    /// Slot named `sentinel_user` under `state_dir`. The directory is created lazily on save.
    pub fn new<P: AsRef<Path>>(state_dir: P) -> Self {
        Self { path: state_dir.as_ref().join(format!("{}.json", SLOT_KEY)) }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn io_err(&self, source: std::io::Error) -> SlotError {
        SlotError::Io { path: self.path.clone(), source }
    }
}

impl IdentityStore for FileSlotStore {
    fn load(&self) -> SlotResult<Option<Identity>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(target: "sentinel::storage", "slot load: '{}' absent", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_err(e)),
        };
        let identity = decode_record(&bytes)?;
        debug!(target: "sentinel::storage", "slot load: '{}' user={}", self.path.display(), identity.email);
        Ok(Some(identity))
    }

    fn save(&self, identity: &Identity) -> SlotResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
            }
        }
        let bytes = encode_record(identity)?;
        // Write beside the slot then rename so a crash never leaves half a record.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        debug!(target: "sentinel::storage", "slot save: '{}' user={}", self.path.display(), identity.email);
        Ok(())
    }

    fn clear(&self) -> SlotResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(target: "sentinel::storage", "slot clear: '{}' removed", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_err(e)),
        }
    }
}
