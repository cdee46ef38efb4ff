//! Handlers for `dua categories` and `dua list`.

use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;

pub async fn execute_categories() -> Result<()> {
    let categories = bootstrap::build_dua_service().categories().await?;

    if output::is_json() {
        output::json_result("dua categories", "categories", &categories);
        return Ok(());
    }

    output::section("Dua categories");
    for category in &categories {
        output::field(&category.name_en, &category.name);
    }
    Ok(())
}

pub async fn execute_list(category: Option<&str>) -> Result<()> {
    let duas = bootstrap::build_dua_service().duas(category).await?;

    if output::is_json() {
        output::json_result("dua list", "duas", &duas);
        return Ok(());
    }

    if duas.is_empty() {
        output::note("لا توجد أدعية في هذا التصنيف");
        output::hint("see `mishkat dua categories`");
        return Ok(());
    }
    for dua in &duas {
        output::section(&dua.title);
        output::note(&dua.category);
        output::lines(&dua.text);
    }
    Ok(())
}
