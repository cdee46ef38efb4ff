//! Hadith source port.

use async_trait::async_trait;

use crate::domain::{HadithCollection, HadithPage, PageRequest};
use crate::error::Result;

#[async_trait]
pub trait HadithSource: Send + Sync {
    /// All collections this source knows.
    async fn collections(&self) -> Result<Vec<HadithCollection>>;

    /// One page of hadith from a collection.
    ///
    /// Unknown collection ids are a [`DomainError::UnknownCollection`](crate::domain::error::DomainError::UnknownCollection).
    async fn hadiths(&self, collection: &str, page: PageRequest) -> Result<HadithPage>;

    fn source_name(&self) -> &'static str;
}
