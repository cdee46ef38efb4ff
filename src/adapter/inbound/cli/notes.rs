//! Handlers for `notes list|show|set|delete`.

use std::path::Path;

use super::output;
use crate::application::Bookmarks;
use crate::error::Result;
use crate::infrastructure::bootstrap;

pub const SAVED_MESSAGE: &str = "تم حفظ الملاحظة بنجاح";
pub const DELETED_MESSAGE: &str = "تم حذف الملاحظة بنجاح";

fn bookmarks(store_path: &Path) -> Result<Bookmarks> {
    Ok(bootstrap::build_bookmarks(bootstrap::open_store(store_path)?))
}

pub fn execute_list(store_path: &Path) -> Result<()> {
    let notes = bookmarks(store_path)?.notes()?;

    if output::is_json() {
        output::json_result("notes list", "notes", &notes);
        return Ok(());
    }
    if notes.is_empty() {
        output::note("لا توجد ملاحظات");
        return Ok(());
    }
    for note in &notes {
        output::field(&format!("Surah {}", note.surah_number), note.preview());
    }
    Ok(())
}

pub fn execute_show(store_path: &Path, number: u32) -> Result<()> {
    let note = bookmarks(store_path)?.note(number)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "notes show",
            "surah": number,
            "note": note,
        }));
        return Ok(());
    }
    match note {
        Some(text) => {
            output::section(&format!("Surah {number}"));
            output::lines(&text);
        }
        None => output::note("لا توجد ملاحظة لهذه السورة"),
    }
    Ok(())
}

pub fn execute_set(store_path: &Path, number: u32, text: &str) -> Result<()> {
    let kept = bookmarks(store_path)?.save_note(number, text)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "notes set",
            "surah": number,
            "saved": kept,
        }));
        return Ok(());
    }
    output::success(if kept { SAVED_MESSAGE } else { DELETED_MESSAGE });
    Ok(())
}

pub fn execute_delete(store_path: &Path, number: u32) -> Result<()> {
    let existed = bookmarks(store_path)?.delete_note(number)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "notes delete",
            "surah": number,
            "deleted": existed,
        }));
        return Ok(());
    }
    if existed {
        output::success(DELETED_MESSAGE);
    } else {
        output::note("لا توجد ملاحظة لهذه السورة");
    }
    Ok(())
}
