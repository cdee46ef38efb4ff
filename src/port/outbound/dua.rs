//! Dua source port.

use async_trait::async_trait;

use crate::domain::{Dua, DuaCategory};
use crate::error::Result;

#[async_trait]
pub trait DuaSource: Send + Sync {
    async fn categories(&self) -> Result<Vec<DuaCategory>>;

    /// Every dua, across all categories.
    async fn duas(&self) -> Result<Vec<Dua>>;
}
