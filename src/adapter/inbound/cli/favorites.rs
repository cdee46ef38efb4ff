//! Handlers for `favorites list|add|remove|toggle`.

use std::path::Path;

use tabled::Tabled;

use super::output;
use crate::application::Bookmarks;
use crate::domain::{FavoriteSurah, SurahNumber};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

pub const ADDED_MESSAGE: &str = "تمت إضافة السورة إلى المفضلة";
pub const REMOVED_MESSAGE: &str = "تمت إزالة السورة من المفضلة";

#[derive(Tabled)]
struct FavoriteRow {
    #[tabled(rename = "#")]
    number: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "English")]
    english: String,
    #[tabled(rename = "Ayahs")]
    ayahs: u32,
    #[tabled(rename = "Added")]
    added: String,
}

impl From<FavoriteSurah> for FavoriteRow {
    fn from(favorite: FavoriteSurah) -> Self {
        Self {
            number: favorite.surah_number,
            name: favorite.name,
            english: favorite.english_name,
            ayahs: favorite.number_of_ayahs,
            added: favorite.added_at.format("%Y-%m-%d").to_string(),
        }
    }
}

fn bookmarks(store_path: &Path) -> Result<Bookmarks> {
    Ok(bootstrap::build_bookmarks(bootstrap::open_store(store_path)?))
}

fn report(command: &str, number: u32, favorite: bool, message: &str) {
    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": command,
            "surah": number,
            "favorite": favorite,
        }));
        return;
    }
    output::success(message);
}

pub fn execute_list(store_path: &Path) -> Result<()> {
    let favorites = bookmarks(store_path)?.favorites()?;

    if output::is_json() {
        output::json_result("favorites list", "favorites", &favorites);
        return Ok(());
    }
    if favorites.is_empty() {
        output::note("لا توجد سور في المفضلة");
        output::hint("add one with `mishkat favorites add <number>`");
        return Ok(());
    }
    output::table(favorites.into_iter().map(FavoriteRow::from));
    Ok(())
}

pub async fn execute_add(config: &Config, store_path: &Path, number: u32) -> Result<()> {
    SurahNumber::new(number)?;
    let bookmarks = bookmarks(store_path)?;
    if bookmarks.is_favorite(number)? {
        report("favorites add", number, true, "السورة موجودة في المفضلة");
        return Ok(());
    }

    let surah = bootstrap::build_quran_service(config).surah_info(number).await?;
    bookmarks.add(&surah)?;
    report("favorites add", number, true, ADDED_MESSAGE);
    Ok(())
}

pub fn execute_remove(store_path: &Path, number: u32) -> Result<()> {
    SurahNumber::new(number)?;
    let removed = bookmarks(store_path)?.remove(number)?;
    if removed || output::is_json() {
        report("favorites remove", number, false, REMOVED_MESSAGE);
    } else {
        output::warning("السورة ليست في المفضلة");
    }
    Ok(())
}

pub async fn execute_toggle(config: &Config, store_path: &Path, number: u32) -> Result<()> {
    SurahNumber::new(number)?;
    let bookmarks = bookmarks(store_path)?;
    if bookmarks.remove(number)? {
        report("favorites toggle", number, false, REMOVED_MESSAGE);
        return Ok(());
    }

    let surah = bootstrap::build_quran_service(config).surah_info(number).await?;
    bookmarks.add(&surah)?;
    report("favorites toggle", number, true, ADDED_MESSAGE);
    Ok(())
}
