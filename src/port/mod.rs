//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │       Application        │
//!                 │   (Quran, prayer, ...)   │
//!                 └────────────┬─────────────┘
//!                              │ port::outbound
//!       ┌──────────────┬───────┴───────┬────────────────┐
//!       ▼              ▼               ▼                ▼
//! ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌────────────┐
//! │ REST APIs │  │ Catalogue │  │ Geocoder    │  │ Key-value  │
//! │ (reqwest) │  │ (mock)    │  │ (nominatim) │  │ store      │
//! └───────────┘  └───────────┘  └─────────────┘  └────────────┘
//! ```

pub mod outbound;
