//! Survey Store - durable, append-only response collection
//!
//! Provides:
//! - `SlotStorage`: named key-value slots (in-memory or filesystem)
//! - Atomic temp→rename writes for the filesystem backend
//! - `ResponseStore`: append / load_all / clear over one slot

pub mod errors;
pub mod response_store;
pub mod slot;

// Re-export key types
pub use errors::Result;
pub use response_store::{AppendOutcome, ResponseStore, StoreStats};
pub use slot::{FsSlots, MemorySlots, SlotStorage};
