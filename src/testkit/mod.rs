//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for surahs, ayahs and prayer boards.
//! - [`source`] - In-process implementations of the outbound ports: static
//!   sources that serve canned data and [`source::Offline`], which fails every
//!   call the way an unreachable upstream would.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod source;
