use parking_lot::Mutex;
use std::sync::Arc;

use super::{decode_record, encode_record, IdentityStore, SlotResult};
use crate::identity::Identity;

/// In-process identity slot. Clones share the same slot, so a second provider built
/// from a clone sees what the first one persisted (a process restart in miniature).
///
/// The slot keeps the serialized bytes rather than the decoded value so that it goes
/// through the same decode path as the file adapter.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slot: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemorySlotStore {
    pub fn new() -> Self { Self::default() }

    /// Overwrite the slot with arbitrary bytes, bypassing encoding.
    pub fn put_raw(&self, bytes: impl Into<Vec<u8>>) { *self.slot.lock() = Some(bytes.into()); }

    pub fn raw(&self) -> Option<Vec<u8>> { self.slot.lock().clone() }

    pub fn is_empty(&self) -> bool { self.slot.lock().is_none() }
}

impl IdentityStore for MemorySlotStore {
    fn load(&self) -> SlotResult<Option<Identity>> {
        match self.slot.lock().as_deref() {
            Some(bytes) => decode_record(bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, identity: &Identity) -> SlotResult<()> {
        let bytes = encode_record(identity)?;
        *self.slot.lock() = Some(bytes);
        Ok(())
    }

    fn clear(&self) -> SlotResult<()> {
        self.slot.lock().take();
        Ok(())
    }
}
