//! Dua categories and supplications shipped with the app.

use async_trait::async_trait;

use crate::domain::{Dua, DuaCategory};
use crate::error::Result;
use crate::port::outbound::dua::DuaSource;

const CATEGORIES: [(u32, &str, &str); 4] = [
    (1, "أذكار الصباح والمساء", "morning-evening"),
    (2, "أدعية المتوفى", "deceased"),
    (3, "أدعية الاستغفار", "forgiveness"),
    (4, "أدعية القرآن", "quran"),
];

/// `(id, title, text, category id)`.
const DUAS: [(u32, &str, &str, u32); 3] = [
    (
        1,
        "دعاء الصباح",
        "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ، لَا إِلَٰهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ",
        1,
    ),
    (
        2,
        "دعاء للميت",
        "اللَّهُمَّ اغْفِرْ لَهُ وَارْحَمْهُ وَعَافِهِ وَاعْفُ عَنْهُ، وَأَكْرِمْ نُزُلَهُ، وَوَسِّعْ مُدْخَلَهُ",
        2,
    ),
    (
        3,
        "دعاء الاستغفار",
        "اللَّهُمَّ أَنْتَ رَبِّي لَا إِلَهَ إِلَّا أَنْتَ، خَلَقْتَنِي وَأَنَا عَبْدُكَ، وَأَنَا عَلَى عَهْدِكَ وَوَعْدِكَ مَا اسْتَطَعْتُ",
        3,
    ),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct DuaCatalog;

impl DuaCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DuaSource for DuaCatalog {
    async fn categories(&self) -> Result<Vec<DuaCategory>> {
        Ok(CATEGORIES
            .iter()
            .map(|(id, name, slug)| DuaCategory {
                id: *id,
                name: (*name).to_string(),
                name_en: (*slug).to_string(),
            })
            .collect())
    }

    async fn duas(&self) -> Result<Vec<Dua>> {
        Ok(DUAS
            .iter()
            .map(|(id, title, text, category_id)| Dua {
                id: *id,
                title: (*title).to_string(),
                text: (*text).to_string(),
                category: CATEGORIES
                    .iter()
                    .find(|(cid, _, _)| cid == category_id)
                    .map(|(_, name, _)| (*name).to_string())
                    .unwrap_or_default(),
                category_id: *category_id,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_dua_points_at_a_known_category() {
        let catalog = DuaCatalog::new();
        let categories = catalog.categories().await.expect("categories");
        let duas = catalog.duas().await.expect("duas");

        assert_eq!(categories.len(), 4);
        assert_eq!(duas.len(), 3);
        for dua in &duas {
            let category = categories
                .iter()
                .find(|c| c.id == dua.category_id)
                .expect("category exists");
            assert_eq!(dua.category, category.name);
        }
    }

    #[tokio::test]
    async fn quran_category_has_no_duas_yet() {
        let duas = DuaCatalog::new().duas().await.expect("duas");
        assert!(duas.iter().all(|d| d.category_id != 4));
    }
}
