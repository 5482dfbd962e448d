pub mod error;
pub mod record;
pub mod types;
pub mod value;

pub use error::{DeskError, Result};
pub use record::FileRecord;
pub use types::{FileId, Timestamp};
pub use value::{ContactEntry, FieldValue};
