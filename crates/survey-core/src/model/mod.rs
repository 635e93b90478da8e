pub mod fields;
pub mod record;

pub use fields::{FieldValue, FormFields};
pub use record::{ResponseId, ResponseRecord};
