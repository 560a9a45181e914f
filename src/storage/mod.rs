//!
//! sentinel storage module
//! -----------------------
//! Persistence port for the single identity slot. The session provider is the only
//! owner of an `IdentityStore`; it reads the slot once at start-up, writes it on
//! sign-in and clears it on sign-out.
//!
//! Two adapters ship with the crate:
//! - `FileSlotStore`: one JSON document per slot key under a state directory.
//! - `MemorySlotStore`: process-local slot with a clonable handle, used for tests and
//!   for embedding without touching disk.
//!
//! The record format is the JSON form of `Identity` (`id`, `email`, `name`, `role`,
//! optional `organization`). There is no versioning and no migration.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::AppError;
use crate::identity::Identity;

mod file;
mod memory;

pub use file::FileSlotStore;
pub use memory::MemorySlotStore;

/// Name of the persisted slot holding the signed-in identity.
pub const SLOT_KEY: &str = "sentinel_user";

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot i/o failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed identity record in slot '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode identity record: {0}")]
    Encode(#[source] serde_json::Error),
}

impl SlotError {
    pub fn is_malformed(&self) -> bool { matches!(self, SlotError::Malformed { .. }) }
}

pub type SlotResult<T> = Result<T, SlotError>;

impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        match err {
            SlotError::Io { .. } => AppError::io("slot_io", err.to_string()),
            SlotError::Malformed { .. } => AppError::user("malformed_session", err.to_string()),
            SlotError::Encode(_) => AppError::internal("slot_encode", err.to_string()),
        }
    }
}

/// Port over the persisted identity slot.
pub trait IdentityStore: Send + Sync {
    /// `Ok(None)` when the slot is empty.
    fn load(&self) -> SlotResult<Option<Identity>>;
    fn save(&self, identity: &Identity) -> SlotResult<()>;
    /// Clearing an already empty slot succeeds.
    fn clear(&self) -> SlotResult<()>;
}

pub(crate) fn decode_record(bytes: &[u8]) -> SlotResult<Identity> {
    serde_json::from_slice::<Identity>(bytes)
        .map_err(|source| SlotError::Malformed { key: SLOT_KEY.to_string(), source })
}

pub(crate) fn encode_record(identity: &Identity) -> SlotResult<Vec<u8>> {
    serde_json::to_vec_pretty(identity).map_err(SlotError::Encode)
}
