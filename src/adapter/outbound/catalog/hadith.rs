//! Six canonical hadith books with placeholder hadith text.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::{Hadith, HadithCollection, HadithPage, PageRequest};
use crate::error::Result;
use crate::port::outbound::hadith::HadithSource;

/// `(id, Arabic name, hadith count)` in menu order.
const COLLECTIONS: [(&str, &str, u32); 6] = [
    ("bukhari", "صحيح البخاري", 7563),
    ("muslim", "صحيح مسلم", 5362),
    ("tirmidhi", "سنن الترمذي", 3891),
    ("abudawud", "سنن أبي داود", 4590),
    ("nasai", "سنن النسائي", 5662),
    ("ibnmajah", "سنن ابن ماجه", 4332),
];

/// Hadith source backed by the built-in collection table.
#[derive(Debug, Default, Clone, Copy)]
pub struct HadithCatalog;

impl HadithCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn find(id: &str) -> Option<(&'static str, &'static str, u32)> {
        COLLECTIONS.iter().copied().find(|(slug, _, _)| *slug == id)
    }

    fn placeholder(collection: &str, number: u32) -> Hadith {
        Hadith {
            number,
            arab: format!(
                "حديث رقم {number} من كتاب {collection}. هذا نص تجريبي للحديث، وفي الواقع سيكون هنا نص الحديث الشريف بالكامل."
            ),
            id: format!("{collection}-{number}"),
        }
    }
}

#[async_trait]
impl HadithSource for HadithCatalog {
    async fn collections(&self) -> Result<Vec<HadithCollection>> {
        Ok(COLLECTIONS
            .iter()
            .map(|(id, name, total)| HadithCollection {
                id: (*id).to_string(),
                name: (*name).to_string(),
                total: *total,
                available: *total,
            })
            .collect())
    }

    async fn hadiths(&self, collection: &str, page: PageRequest) -> Result<HadithPage> {
        let (id, _, total) = Self::find(collection).ok_or_else(|| DomainError::UnknownCollection {
            id: collection.to_string(),
        })?;

        let hadiths: Vec<Hadith> = if page.page > page.page_count(total) {
            Vec::new()
        } else {
            let first = page.first_number()?;
            (first..first.saturating_add(page.limit))
                .take_while(|number| *number <= total)
                .map(|number| Self::placeholder(id, number))
                .collect()
        };
        debug!(collection = id, page = page.page, count = hadiths.len(), "Built hadith page");

        Ok(HadithPage {
            hadiths,
            total,
            current_page: page.page,
            total_pages: page.page_count(total),
        })
    }

    fn source_name(&self) -> &'static str {
        "catalogue"
    }
}
