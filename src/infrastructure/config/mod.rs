//! Infrastructure configuration modules.

pub mod api;
pub mod logging;
pub mod service;
pub mod settings;
