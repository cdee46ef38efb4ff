//! Handler for `tasbih`.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm};

use super::command::TasbihCommand;
use super::output;
use crate::application::{Tasbih, TasbihTick};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;

pub const MILESTONE_MESSAGE: &str = "ما شاء الله! أكملت 100 تسبيحة";
pub const RESET_MESSAGE: &str = "تم إعادة تعيين العداد";

fn open(store_path: &Path) -> Result<Tasbih> {
    Ok(bootstrap::build_tasbih(bootstrap::open_store(store_path)?))
}

pub fn execute(store_path: &Path, action: Option<&TasbihCommand>) -> Result<()> {
    let tasbih = open(store_path)?;
    match action.unwrap_or(&TasbihCommand::Show) {
        TasbihCommand::Show => show(tasbih.count()?),
        TasbihCommand::Add { times } => added(tasbih.add(*times)?),
        TasbihCommand::Reset { yes } => reset(&tasbih, *yes)?,
    }
    Ok(())
}

fn show(count: u64) {
    if output::is_json() {
        output::json_output(serde_json::json!({ "command": "tasbih", "count": count }));
        return;
    }
    output::field("التسبيح", output::highlight(count));
}

fn added(tick: TasbihTick) {
    if output::is_json() {
        output::json_result("tasbih add", "tasbih", &tick);
        return;
    }
    output::field("التسبيح", output::highlight(tick.count));
    if tick.milestone {
        output::success(MILESTONE_MESSAGE);
    }
}

fn reset(tasbih: &Tasbih, yes: bool) -> Result<()> {
    if !yes {
        if output::is_json() {
            return Err(ConfigError::InvalidValue {
                field: "yes",
                reason: "`tasbih reset` needs --yes in JSON mode".to_string(),
            }
            .into());
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Reset the tasbih counter to zero?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::note("Cancelled");
            return Ok(());
        }
    }

    tasbih.reset()?;
    if output::is_json() {
        output::json_output(serde_json::json!({ "command": "tasbih reset", "count": 0 }));
        return Ok(());
    }
    output::success(RESET_MESSAGE);
    Ok(())
}
