//! Handler for `prayer`.

use chrono::{Local, NaiveDate, NaiveDateTime};

use super::command::PrayerArgs;
use super::output;
use crate::application::{LocationSource, PrayerBoard};
use crate::domain::TimeOfDay;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

pub async fn execute(config: &Config, args: &PrayerArgs) -> Result<()> {
    let service = bootstrap::build_prayer_service(config)?;
    let now = Local::now();
    let now = now.naive_local();
    let date = args.date.unwrap_or(now.date());
    let time = countdown_from(date, now);

    let pb = output::spinner("Loading prayer times...");
    let board = match service.board(args.coordinates(), date, time).await {
        Ok(board) => {
            pb.finish_and_clear();
            board
        }
        Err(e) => {
            output::spinner_fail(&pb, "Could not load prayer times");
            return Err(e);
        }
    };

    if output::is_json() {
        output::json_result("prayer", "board", &board);
        return Ok(());
    }
    render(&board);
    Ok(())
}

/// The clock time to count down from, only when the board is for today.
fn countdown_from(date: NaiveDate, now: NaiveDateTime) -> Option<TimeOfDay> {
    (date == now.date()).then(|| TimeOfDay::from_naive(now.time()))
}

fn render(board: &PrayerBoard) {
    output::section("مواقيت الصلاة");
    output::field("Location", &board.place);
    output::field("Coordinates", board.location.coordinates);
    output::field("Date", board.date);
    if board.location.source == LocationSource::Default {
        output::hint("set [location] in the config or pass --lat/--lng");
    }
    println!();

    let upcoming = board.next.as_ref().map(|next| next.prayer);
    for (prayer, time) in board.timings.entries() {
        let line = format!("{:<8} {}", prayer.arabic(), time.format_12h());
        if Some(prayer) == upcoming {
            output::lines(&output::highlight(format!("{line}  ◀")));
        } else {
            output::lines(&line);
        }
    }

    let Some(next) = &board.next else {
        return;
    };
    output::section("الصلاة القادمة");
    let when = if next.tomorrow { " (غداً)" } else { "" };
    output::field(next.prayer.arabic(), format!("{}{when}", next.time.format_12h()));
    output::field("Remaining", next.time_remaining());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).expect("valid time")
    }

    #[test]
    fn countdown_only_for_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        let now = at(today, 13, 0);

        assert_eq!(
            countdown_from(today, now),
            Some(TimeOfDay::from_hm(13, 0).expect("valid time"))
        );
        assert_eq!(countdown_from(today.succ_opt().expect("next day"), now), None);
        assert_eq!(countdown_from(today.pred_opt().expect("previous day"), now), None);
    }
}
