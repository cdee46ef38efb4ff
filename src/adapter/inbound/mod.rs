//! Inbound adapters: how users drive the application.

pub mod cli;
