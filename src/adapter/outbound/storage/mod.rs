//! Key-value storage adapters.
//!
//! Values are opaque strings keyed like browser local storage, so the
//! on-disk file is a single flat JSON object.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
