//! Command orchestration layer.
//!
//! High-level functions that coordinate core formatting with persistence
//! and output.

pub mod admin;
pub mod submit;
