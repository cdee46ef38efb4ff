//! Dua (supplication) records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuaCategory {
    pub id: u32,
    pub name: String,
    /// URL-style English slug, e.g. `morning-evening`.
    pub name_en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dua {
    pub id: u32,
    pub title: String,
    pub text: String,
    /// Category display name.
    pub category: String,
    pub category_id: u32,
}

/// Selects duas by category id or English slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Id(u32),
    Slug(String),
}

impl CategoryFilter {
    /// Numeric input is an id, anything else a slug.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        value
            .parse()
            .map_or_else(|_| Self::Slug(value.to_ascii_lowercase()), Self::Id)
    }

    /// Resolve to a category id against the known categories.
    #[must_use]
    pub fn resolve(&self, categories: &[DuaCategory]) -> Option<u32> {
        match self {
            Self::Id(id) => categories.iter().find(|c| c.id == *id).map(|c| c.id),
            Self::Slug(slug) => categories
                .iter()
                .find(|c| c.name_en.eq_ignore_ascii_case(slug))
                .map(|c| c.id),
        }
    }
}
