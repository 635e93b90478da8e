//! Core types shared across the survey crates
//!
//! - **Schema constants**: canonical log field keys and event names
//! - **Sensitive data**: `Sensitive<T>` marker for credential redaction

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
