//! Mishkat - the Quran, prayer times, hadith and daily remembrance in the
//! terminal.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Surahs, prayer timings, hadith, duas and the pure logic
//!   over them (search normalization, next-prayer countdown, audio timeline)
//! - [`port`] - Traits the application needs from the outside world
//! - [`adapter`] - REST clients, built-in catalogues, the JSON storage file,
//!   and the command-line front end
//! - [`application`] - Services that combine ports into app features
//! - [`infrastructure`] - Configuration loading and service wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use mishkat::infrastructure::bootstrap;
//! use mishkat::infrastructure::config::settings::Config;
//!
//! # async fn run() -> mishkat::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! let quran = bootstrap::build_quran_service(&config);
//! for surah in quran.surahs(Some("الكهف")).await? {
//!     println!("{} {}", surah.number, surah.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
