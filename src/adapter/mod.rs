//! Adapters that connect the application to the outside world.

pub mod inbound;
pub mod outbound;
