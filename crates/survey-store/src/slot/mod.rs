//! Named key-value slots
//!
//! A slot holds one string value under one key, the same model as browser
//! local storage. The response store uses exactly one slot.

mod atomic;
mod fs_slots;
mod memory;

pub use fs_slots::FsSlots;
pub use memory::MemorySlots;

use crate::errors::Result;

/// Key-value backend for the response store
pub trait SlotStorage {
    /// Read a slot; `Ok(None)` when it has never been written or was removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a slot; removing an absent slot succeeds
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
