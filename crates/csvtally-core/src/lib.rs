/// csvtally Core: collection, merging, deduplication and ranking.
///
/// This crate contains all pipeline logic with zero CLI dependencies.
/// The binary only parses arguments, initialises logging and prints the
/// run summary.
///
/// # Modules
///
/// - [`model`]: Output schema, the five fixed patterns and aggregate entries.
/// - [`scanner`]: Deterministic discovery of pattern files, optionally
///   restricted to an allow-set of folders.
/// - [`merge`]: Column-wise projection of every source onto one dataset.
/// - [`analysis`]: Deduplication by key column and stable count ranking.
/// - [`pipeline`]: Per-pattern orchestration: collect, merge, rank, copy.
/// - [`scaffold`]: Header-only template generation.
pub mod analysis;
pub mod error;
pub mod merge;
pub mod model;
pub mod pipeline;
pub mod scaffold;
pub mod scanner;

pub use error::{Result, TallyError};
