//! Handlers for `tafseer editions` and `tafseer show`.

use tabled::Tabled;

use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct EditionRow {
    #[tabled(rename = "Identifier")]
    identifier: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Author")]
    author: String,
}

pub async fn execute_editions(config: &Config) -> Result<()> {
    let editions = bootstrap::build_tafseer_service(config).editions().await?;

    if output::is_json() {
        output::json_result("tafseer editions", "editions", &editions);
        return Ok(());
    }

    output::section("Tafseer editions");
    output::table(editions.into_iter().map(|e| EditionRow {
        identifier: e.identifier,
        name: e.name,
        author: e.author_name,
    }));
    output::field("Default", &config.api.tafseer_edition);
    Ok(())
}

pub async fn execute_show(
    config: &Config,
    surah: u32,
    ayah: u32,
    edition: Option<&str>,
) -> Result<()> {
    let service = bootstrap::build_tafseer_service(config);

    let pb = output::spinner("Loading tafseer...");
    let lookup = match service.tafseer(surah, ayah, edition).await {
        Ok(lookup) => {
            pb.finish_and_clear();
            lookup
        }
        Err(e) => {
            output::spinner_fail(&pb, "Could not load tafseer");
            return Err(e);
        }
    };

    if output::is_json() {
        output::json_result("tafseer show", "tafseer", &lookup);
        return Ok(());
    }

    output::section(&format!("تفسير الآية {}:{}", lookup.surah, lookup.ayah));
    output::field("Source", &lookup.tafseer.resource_name);
    output::field("Author", &lookup.tafseer.author_name);
    if lookup.fallback {
        output::warning("تعذر الاتصال بالخادم، يتم عرض نص احتياطي");
    }
    println!();
    output::lines(&lookup.tafseer.text);
    Ok(())
}
