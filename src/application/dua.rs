//! Dua categories and filtered listings.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{CategoryFilter, Dua, DuaCategory};
use crate::error::Result;
use crate::port::outbound::dua::DuaSource;

pub struct DuaService {
    source: Arc<dyn DuaSource>,
}

impl DuaService {
    pub fn new(source: Arc<dyn DuaSource>) -> Self {
        Self { source }
    }

    pub async fn categories(&self) -> Result<Vec<DuaCategory>> {
        self.source.categories().await
    }

    /// All duas, or those of one category given by id or English slug.
    ///
    /// An unknown category yields an empty list.
    pub async fn duas(&self, category: Option<&str>) -> Result<Vec<Dua>> {
        let duas = self.source.duas().await?;
        let Some(filter) = category.map(CategoryFilter::parse) else {
            return Ok(duas);
        };

        let categories = self.source.categories().await?;
        let Some(id) = filter.resolve(&categories) else {
            debug!(?filter, "No such dua category");
            return Ok(Vec::new());
        };
        Ok(duas.into_iter().filter(|d| d.category_id == id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::catalog::DuaCatalog;

    fn service() -> DuaService {
        DuaService::new(Arc::new(DuaCatalog::new()))
    }

    fn ids(duas: &[Dua]) -> Vec<u32> {
        duas.iter().map(|d| d.id).collect()
    }

    #[tokio::test]
    async fn unfiltered_lists_everything() {
        assert_eq!(ids(&service().duas(None).await.expect("duas")), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn filters_by_id_or_slug() {
        let service = service();
        assert_eq!(ids(&service.duas(Some("2")).await.expect("duas")), vec![2]);
        assert_eq!(
            ids(&service.duas(Some("forgiveness")).await.expect("duas")),
            vec![3]
        );
    }

    #[tokio::test]
    async fn empty_or_unknown_category_lists_nothing() {
        let service = service();
        assert!(service.duas(Some("quran")).await.expect("duas").is_empty());
        assert!(service.duas(Some("99")).await.expect("duas").is_empty());
        assert!(service.duas(Some("travel")).await.expect("duas").is_empty());
    }
}
