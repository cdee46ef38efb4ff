//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! Content sources are async and may hit the network; the key-value store is
//! synchronous and local.

pub mod dua;
pub mod hadith;
pub mod prayer;
pub mod quran;
pub mod storage;
