//! Favorite surahs and per-surah notes kept in local storage.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{FavoriteSurah, Surah, SurahNote, SurahNumber};
use crate::error::{Error, Result, StoreError};
use crate::port::outbound::storage::{note_key, parse_note_key, KeyValueStore, FAVORITES_KEY};

pub struct Bookmarks {
    store: Arc<dyn KeyValueStore>,
}

impl Bookmarks {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Favorites in the order they were added.
    pub fn favorites(&self) -> Result<Vec<FavoriteSurah>> {
        let Some(raw) = self.store.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| {
            Error::from(StoreError::CorruptValue {
                key: FAVORITES_KEY.to_string(),
                reason: e.to_string(),
            })
        })
    }

    fn save_favorites(&self, favorites: &[FavoriteSurah]) -> Result<()> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &raw)
    }

    pub fn is_favorite(&self, number: u32) -> Result<bool> {
        Ok(self
            .favorites()?
            .iter()
            .any(|f| f.surah_number == number))
    }

    /// Add a favorite stamped with the current time.
    ///
    /// Returns `false` when the surah was already a favorite.
    pub fn add(&self, surah: &Surah) -> Result<bool> {
        self.add_at(surah, Utc::now())
    }

    pub fn add_at(&self, surah: &Surah, added_at: DateTime<Utc>) -> Result<bool> {
        SurahNumber::new(surah.number)?;
        let mut favorites = self.favorites()?;
        if favorites.iter().any(|f| f.surah_number == surah.number) {
            debug!(surah = surah.number, "Already a favorite");
            return Ok(false);
        }
        favorites.push(FavoriteSurah::from_surah(surah, added_at));
        self.save_favorites(&favorites)?;
        info!(surah = surah.number, "Added favorite");
        Ok(true)
    }

    /// Returns `false` when the surah was not a favorite.
    pub fn remove(&self, number: u32) -> Result<bool> {
        let mut favorites = self.favorites()?;
        let before = favorites.len();
        favorites.retain(|f| f.surah_number != number);
        if favorites.len() == before {
            return Ok(false);
        }
        self.save_favorites(&favorites)?;
        info!(surah = number, "Removed favorite");
        Ok(true)
    }

    /// Flip favorite state; returns whether the surah is now a favorite.
    pub fn toggle(&self, surah: &Surah) -> Result<bool> {
        if self.remove(surah.number)? {
            Ok(false)
        } else {
            self.add(surah)
        }
    }

    pub fn note(&self, number: u32) -> Result<Option<String>> {
        let number = SurahNumber::new(number)?;
        Ok(self
            .store
            .get(&note_key(number.get()))?
            .filter(|text| !text.trim().is_empty()))
    }

    /// Store a note; blank text deletes it. Returns whether a note remains.
    pub fn save_note(&self, number: u32, text: &str) -> Result<bool> {
        let number = SurahNumber::new(number)?;
        if text.trim().is_empty() {
            self.store.remove(&note_key(number.get()))?;
            return Ok(false);
        }
        self.store.set(&note_key(number.get()), text)?;
        info!(surah = number.get(), chars = text.chars().count(), "Saved note");
        Ok(true)
    }

    /// Returns `false` when there was no note.
    pub fn delete_note(&self, number: u32) -> Result<bool> {
        let existed = self.note(number)?.is_some();
        self.store.remove(&note_key(number))?;
        Ok(existed)
    }

    /// Every non-blank note in surah order.
    ///
    /// Keys that do not name a valid surah are skipped.
    pub fn notes(&self) -> Result<Vec<SurahNote>> {
        let mut notes = Vec::new();
        for key in self.store.keys()? {
            let number = parse_note_key(&key).and_then(|n| SurahNumber::new(n).ok());
            let Some(number) = number else {
                continue;
            };
            if let Some(content) = self.store.get(&key)? {
                if !content.trim().is_empty() {
                    notes.push(SurahNote {
                        surah_number: number.get(),
                        content,
                    });
                }
            }
        }
        notes.sort_by_key(|note| note.surah_number);
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::storage::MemoryStore;
    use crate::domain::error::DomainError;
    use crate::testkit::domain::surah_index;

    fn bookmarks() -> (Bookmarks, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (Bookmarks::new(store.clone()), store)
    }

    #[test]
    fn add_is_idempotent() {
        let (bookmarks, _) = bookmarks();
        let index = surah_index();

        assert!(bookmarks.add(&index[0]).expect("add"));
        assert!(!bookmarks.add(&index[0]).expect("add again"));
        assert!(bookmarks.add(&index[1]).expect("add"));

        let numbers: Vec<u32> = bookmarks
            .favorites()
            .expect("favorites")
            .iter()
            .map(|f| f.surah_number)
            .collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn favorites_are_stored_as_camel_case_array() {
        let (bookmarks, store) = bookmarks();
        bookmarks.add(&surah_index()[2]).expect("add");

        let raw = store.get(FAVORITES_KEY).expect("get").expect("stored");
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"surahNumber\":112"));
        assert!(raw.contains("\"numberOfAyahs\":4"));
    }

    #[test]
    fn toggle_flips_state() {
        let (bookmarks, _) = bookmarks();
        let fatiha = &surah_index()[0];

        assert!(bookmarks.toggle(fatiha).expect("toggle on"));
        assert!(bookmarks.is_favorite(1).expect("check"));
        assert!(!bookmarks.toggle(fatiha).expect("toggle off"));
        assert!(!bookmarks.is_favorite(1).expect("check"));
    }

    #[test]
    fn remove_reports_missing() {
        let (bookmarks, _) = bookmarks();
        assert!(!bookmarks.remove(36).expect("remove"));
    }

    #[test]
    fn corrupt_favorites_are_reported() {
        let store = Arc::new(MemoryStore::with_entries([(FAVORITES_KEY, "{not json")]));
        let bookmarks = Bookmarks::new(store);
        assert!(matches!(
            bookmarks.favorites(),
            Err(Error::Store(StoreError::CorruptValue { .. }))
        ));
    }

    #[test]
    fn blank_note_deletes() {
        let (bookmarks, store) = bookmarks();
        assert!(bookmarks.save_note(18, "قصة أصحاب الكهف").expect("save"));
        assert_eq!(
            bookmarks.note(18).expect("note").as_deref(),
            Some("قصة أصحاب الكهف")
        );

        assert!(!bookmarks.save_note(18, "   ").expect("save blank"));
        assert_eq!(bookmarks.note(18).expect("note"), None);
        assert_eq!(store.get("notes-surah-18").expect("get"), None);
    }

    #[test]
    fn notes_are_listed_in_surah_order_skipping_blank() {
        let store = Arc::new(MemoryStore::with_entries([
            ("notes-surah-36", "قلب القرآن"),
            ("notes-surah-2", "آية الكرسي"),
            ("notes-surah-5", "  "),
            ("notes-surah-200", "out of range"),
            ("notes-surah-0", "out of range"),
            ("notes-surah-abc", "not a number"),
            ("tasbihCount", "12"),
        ]));
        let bookmarks = Bookmarks::new(store);

        let notes = bookmarks.notes().expect("notes");
        let numbers: Vec<u32> = notes.iter().map(|n| n.surah_number).collect();
        assert_eq!(numbers, vec![2, 36]);
    }

    #[test]
    fn delete_note_reports_existence() {
        let (bookmarks, _) = bookmarks();
        bookmarks.save_note(1, "الحمد").expect("save");
        assert!(bookmarks.delete_note(1).expect("delete"));
        assert!(!bookmarks.delete_note(1).expect("delete again"));
    }

    #[test]
    fn note_numbers_are_validated() {
        let (bookmarks, _) = bookmarks();
        assert!(matches!(
            bookmarks.save_note(0, "x"),
            Err(Error::Domain(DomainError::InvalidSurahNumber { number: 0 }))
        ));
    }
}
