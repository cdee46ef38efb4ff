//! Hadith collections and paged listings.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{HadithCollection, HadithPage, PageRequest};
use crate::error::Result;
use crate::port::outbound::hadith::HadithSource;

/// Page size used when none is given.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

pub struct HadithService {
    source: Arc<dyn HadithSource>,
}

impl HadithService {
    pub fn new(source: Arc<dyn HadithSource>) -> Self {
        Self { source }
    }

    pub async fn collections(&self) -> Result<Vec<HadithCollection>> {
        self.source.collections().await
    }

    /// One page of `collection`; `page` starts at 1 and `limit` is 1..=100.
    pub async fn page(&self, collection: &str, page: u32, limit: u32) -> Result<HadithPage> {
        let request = PageRequest::new(page, limit)?;
        let result = self.source.hadiths(collection, request).await?;
        debug!(
            source = self.source.source_name(),
            collection,
            page,
            returned = result.hadiths.len(),
            "Listed hadiths"
        );
        Ok(result)
    }
}
