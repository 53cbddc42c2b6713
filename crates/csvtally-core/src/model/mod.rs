/// Data model for csvtally.
///
/// Re-exports the output schema, the fixed input patterns and the
/// aggregate entry produced by deduplication.
pub mod entry;
pub mod pattern;
pub mod schema;

pub use entry::AggregateEntry;
pub use pattern::{OutputNaming, Pattern};
pub use schema::{Schema, COUNT_COLUMN, DEFAULT_COLUMNS, DEFAULT_KEY};
