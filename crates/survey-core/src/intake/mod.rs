//! Form intake checks: required-field presence and completion progress

mod progress;
mod validation;

pub use progress::progress;
pub use validation::{validate_required, MissingField};
