//! Outbound adapters (driven side).

pub mod catalog;
pub mod http;
pub mod storage;
