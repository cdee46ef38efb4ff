//! Handlers for `surah list`, `surah show` and `surah audio`.

use tabled::Tabled;

use super::command::{SurahAudioArgs, SurahShowArgs};
use super::output;
use crate::domain::{Surah, SurahNumber};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct SurahRow {
    #[tabled(rename = "#")]
    number: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "English")]
    english: String,
    #[tabled(rename = "Ayahs")]
    ayahs: u32,
    #[tabled(rename = "Revelation")]
    revelation: &'static str,
}

impl From<&Surah> for SurahRow {
    fn from(surah: &Surah) -> Self {
        Self {
            number: surah.number,
            name: surah.name.clone(),
            english: format!("{} ({})", surah.english_name, surah.english_name_translation),
            ayahs: surah.number_of_ayahs,
            revelation: surah.revelation_type.arabic(),
        }
    }
}

/// Format seconds as `m:ss`.
fn clock(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub async fn execute_list(config: &Config, search: Option<&str>) -> Result<()> {
    let service = bootstrap::build_quran_service(config);

    let pb = output::spinner("Loading surahs...");
    let surahs = match service.surahs(search).await {
        Ok(surahs) => {
            output::spinner_success(&pb, &format!("{} surahs", surahs.len()));
            surahs
        }
        Err(e) => {
            output::spinner_fail(&pb, "Could not load surahs");
            return Err(e);
        }
    };

    if output::is_json() {
        output::json_result("surah list", "surahs", &surahs);
        return Ok(());
    }

    if surahs.is_empty() {
        output::note("لا توجد نتائج");
        return Ok(());
    }
    output::table(surahs.iter().map(SurahRow::from));
    Ok(())
}

pub async fn execute_show(config: &Config, args: &SurahShowArgs) -> Result<()> {
    let number = SurahNumber::new(args.number)?;
    for ayah in [args.from, args.to].into_iter().flatten() {
        number.check_ayah(ayah)?;
    }

    let service = bootstrap::build_quran_service(config);
    let pb = output::spinner("Loading surah...");
    let detail = match service.surah(number.get()).await {
        Ok(detail) => {
            pb.finish_and_clear();
            detail
        }
        Err(e) => {
            output::spinner_fail(&pb, "Could not load surah");
            return Err(e);
        }
    };
    let ayahs = detail.ayah_range(args.from, args.to);

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "surah show",
            "surah": detail.surah,
            "ayahs": ayahs,
        }));
        return Ok(());
    }

    output::section(&detail.surah.name);
    output::field("English", &detail.surah.english_name);
    output::field("Ayahs", detail.surah.number_of_ayahs);
    output::field("Revelation", detail.surah.revelation_type.arabic());
    println!();

    for ayah in ayahs {
        let marker = output::highlight(format!("﴿{}﴾", ayah.number_in_surah));
        let sajda = if ayah.sajda { " ۩" } else { "" };
        output::lines(&format!("{} {marker}{sajda}", ayah.text));
    }
    Ok(())
}

pub fn execute_audio(config: &Config, args: &SurahAudioArgs) -> Result<()> {
    let service = bootstrap::build_quran_service(config);
    let audio = service.audio(args.number, args.reciter)?;
    let timeline = args
        .duration
        .map(|duration| service.timeline(args.number, duration))
        .transpose()?;
    let current = args
        .at
        .zip(timeline.as_ref())
        .map(|(at, timeline)| timeline.ayah_at(at));

    if output::is_json() {
        let starts: Option<Vec<f64>> = timeline
            .as_ref()
            .map(|t| (1..=t.len()).map(|ayah| t.start_of(ayah)).collect());
        output::json_output(serde_json::json!({
            "command": "surah audio",
            "audio": audio,
            "ayahStarts": starts,
            "currentAyah": current,
        }));
        return Ok(());
    }

    output::section("Recitation");
    output::field("Surah", audio.surah);
    output::field("Reciter", audio.reciter.name);
    output::field("URL", output::highlight(&audio.url));

    let Some(timeline) = timeline else {
        output::hint("pass --duration <secs> to estimate where each ayah starts");
        return Ok(());
    };
    if timeline.is_empty() {
        output::warning("duration must be a positive number of seconds");
        return Ok(());
    }

    if let Some(ayah) = current {
        let previous = timeline.previous(ayah);
        let next = timeline.next(ayah);
        output::field("Now playing", format!("ayah {ayah}"));
        output::field(
            "Previous",
            format!("ayah {previous} at {}", clock(timeline.start_of(previous))),
        );
        output::field(
            "Next",
            format!("ayah {next} at {}", clock(timeline.start_of(next))),
        );
        return Ok(());
    }

    output::section("Ayah start times (estimated)");
    let starts: Vec<String> = (1..=timeline.len())
        .map(|ayah| format!("{ayah:>3}  {}", clock(timeline.start_of(ayah))))
        .collect();
    output::lines(&starts.join("\n"));
    Ok(())
}

pub fn execute_reciters(config: &Config) -> Result<()> {
    let default = config.audio.default_reciter;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "reciters",
            "default": default,
            "reciters": crate::domain::RECITERS,
        }));
        return Ok(());
    }

    output::section("Reciters");
    for reciter in &crate::domain::RECITERS {
        let marker = if reciter.id == default {
            output::highlight("*")
        } else {
            " ".to_string()
        };
        output::lines(&format!(
            "{marker} {}  {}  {}",
            reciter.id,
            reciter.name,
            output::muted(reciter.identifier)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(clock(0.0), "0:00");
        assert_eq!(clock(65.4), "1:05");
        assert_eq!(clock(-3.0), "0:00");
    }

    #[test]
    fn rows_show_arabic_revelation_label() {
        let surah = crate::testkit::domain::surah(
            2,
            "سُورَةُ البَقَرَةِ",
            "Al-Baqara",
            "The Cow",
            crate::domain::RevelationType::Medinan,
        );
        let row = SurahRow::from(&surah);
        assert_eq!(row.english, "Al-Baqara (The Cow)");
        assert_eq!(row.revelation, "مدنية");
    }
}
