use crate::dates::{date_key, days_in_month};
use crate::models::{EntryCollection, PixelCell, PixelMonth, YearGrid};
use chrono::NaiveDate;

/// Cell color for a day that exists but has no entry. Distinct from
/// non-existent cells, which carry no color at all.
pub const EMPTY_DAY_COLOR: &str = "#f3f4f6";

/// The "year in pixels" view: 12 months by 31 day slots, each existing
/// day resolving to its mood color or the empty-day color.
pub fn year_grid(year: i32, entries: &EntryCollection) -> YearGrid {
    let months = (0..12)
        .map(|month0| {
            let day_count = days_in_month(year, month0);
            let cells = (1..=31)
                .map(|day| pixel_cell(year, month0, day, day_count, entries))
                .collect();
            PixelMonth { month0, cells }
        })
        .collect();
    YearGrid { year, months }
}

fn pixel_cell(
    year: i32,
    month0: u32,
    day: u32,
    day_count: u32,
    entries: &EntryCollection,
) -> PixelCell {
    if day > day_count {
        return PixelCell {
            day,
            exists: false,
            date: None,
            mood: None,
            color: None,
        };
    }
    let Some(date) = NaiveDate::from_ymd_opt(year, month0 + 1, day) else {
        return PixelCell {
            day,
            exists: false,
            date: None,
            mood: None,
            color: None,
        };
    };
    let key = date_key(date);
    let mood = entries.get(&key).map(|entry| entry.mood);
    PixelCell {
        day,
        exists: true,
        date: Some(key),
        mood,
        color: Some(mood.map_or(EMPTY_DAY_COLOR, |mood| mood.meta().color)),
    }
}
