//! Daily reflections.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reflection {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
}

/// Built-in reflections, rotated one per day.
pub const REFLECTIONS: [Reflection; 3] = [
    Reflection {
        id: 1,
        title: "فضل تلاوة القرآن",
        content: "قال رسول الله ﷺ: «الذي يقرأ القرآن وهو ماهر به مع السفرة الكرام البررة، والذي يقرأ القرآن ويتتعتع فيه، وهو عليه شاق له أجران»",
    },
    Reflection {
        id: 2,
        title: "التدبر في آيات الله",
        content: "قال تعالى: ﴿أَفَلَا يَتَدَبَّرُونَ الْقُرْآنَ أَمْ عَلَىٰ قُلُوبٍ أَقْفَالُهَا﴾ [محمد: 24]",
    },
    Reflection {
        id: 3,
        title: "القرآن شفاء",
        content: "قال تعالى: ﴿وَنُنَزِّلُ مِنَ الْقُرْآنِ مَا هُوَ شِفَاءٌ وَرَحْمَةٌ لِّلْمُؤْمِنِينَ﴾ [الإسراء: 82]",
    },
];

/// The reflection for a calendar day, stable for the whole day.
#[must_use]
pub fn reflection_for(date: NaiveDate) -> &'static Reflection {
    let index = date.ordinal0() as usize % REFLECTIONS.len();
    &REFLECTIONS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn rotates_by_day_of_year() {
        assert_eq!(reflection_for(date(2026, 1, 1)).id, 1);
        assert_eq!(reflection_for(date(2026, 1, 2)).id, 2);
        assert_eq!(reflection_for(date(2026, 1, 3)).id, 3);
        assert_eq!(reflection_for(date(2026, 1, 4)).id, 1);
    }

    #[test]
    fn same_day_gives_same_reflection() {
        let day = date(2026, 10, 16);
        assert_eq!(reflection_for(day), reflection_for(day));
    }
}
