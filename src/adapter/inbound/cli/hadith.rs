//! Handlers for `hadith collections` and `hadith list`.

use tabled::Tabled;

use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;

#[derive(Tabled)]
struct CollectionRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Hadiths")]
    total: u32,
}

pub async fn execute_collections() -> Result<()> {
    let collections = bootstrap::build_hadith_service().collections().await?;

    if output::is_json() {
        output::json_result("hadith collections", "collections", &collections);
        return Ok(());
    }

    output::section("Hadith collections");
    output::table(collections.into_iter().map(|c| CollectionRow {
        id: c.id,
        name: c.name,
        total: c.total,
    }));
    Ok(())
}

pub async fn execute_list(collection: &str, page: u32, limit: u32) -> Result<()> {
    let listing = bootstrap::build_hadith_service()
        .page(collection, page, limit)
        .await?;

    if output::is_json() {
        output::json_result("hadith list", "page", &listing);
        return Ok(());
    }

    output::section(&format!(
        "{collection} · page {} of {}",
        listing.current_page, listing.total_pages
    ));
    if listing.hadiths.is_empty() {
        output::note("لا توجد أحاديث في هذه الصفحة");
        return Ok(());
    }
    for hadith in &listing.hadiths {
        output::lines(&format!(
            "{} {}",
            output::highlight(format!("[{}]", hadith.number)),
            hadith.arab
        ));
    }
    if listing.current_page < listing.total_pages {
        output::hint(&format!(
            "next page: mishkat hadith list {collection} --page {}",
            listing.current_page + 1
        ));
    }
    Ok(())
}
