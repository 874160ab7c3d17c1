use crate::dates::{date_key, first_of_month, today};
use crate::models::{DayCell, EntryCollection};
use chrono::{Datelike, Duration, NaiveDate};

/// Six fixed weeks, so the grid never reflows between months.
pub const GRID_CELLS: usize = 42;

pub fn month_grid(year: i32, month0: u32, entries: &EntryCollection) -> Vec<DayCell> {
    month_grid_at(today(), year, month0, entries)
}

pub fn month_grid_at(
    today: NaiveDate,
    year: i32,
    month0: u32,
    entries: &EntryCollection,
) -> Vec<DayCell> {
    let Some(first) = first_of_month(year, month0) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday();
    let start = first - Duration::days(i64::from(leading));

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for offset in 0..GRID_CELLS as i64 {
        let date = start + Duration::days(offset);
        let key = date_key(date);
        let entry = entries.get(&key);
        cells.push(DayCell {
            day: date.day(),
            month0: date.month0(),
            year: date.year(),
            in_month: date.year() == year && date.month0() == month0,
            is_today: date == today,
            mood: entry.map(|entry| entry.mood),
            has_journal: entry.is_some_and(|entry| entry.has_journal()),
            date: key,
        });
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{days_in_month, first_weekday_of_month};
    use crate::models::{Entry, EntryPatch, merge_entry};
    use crate::moods::MoodKind;

    fn entry(mood: MoodKind, journal: Option<&str>) -> Entry {
        merge_entry(
            None,
            &EntryPatch {
                mood: Some(mood),
                journal: journal.map(str::to_string),
                ..EntryPatch::default()
            },
        )
        .unwrap()
    }

    fn grid(year: i32, month0: u32, entries: &EntryCollection) -> Vec<DayCell> {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        month_grid_at(today, year, month0, entries)
    }

    #[test]
    fn every_month_fills_exactly_six_weeks() {
        let entries = EntryCollection::default();
        for year in [2023, 2024] {
            for month0 in 0..12 {
                let cells = grid(year, month0, &entries);
                assert_eq!(cells.len(), GRID_CELLS, "{year}-{month0}");

                let leading = cells.iter().take_while(|cell| !cell.in_month).count();
                let middle = cells.iter().filter(|cell| cell.in_month).count();
                assert_eq!(leading as u32, first_weekday_of_month(year, month0));
                assert_eq!(middle as u32, days_in_month(year, month0));

                // In-month cells form one contiguous run.
                let trailing = cells
                    .iter()
                    .rev()
                    .take_while(|cell| !cell.in_month)
                    .count();
                assert_eq!(leading + middle + trailing, GRID_CELLS);
            }
        }
    }

    #[test]
    fn leading_cells_come_from_the_previous_month() {
        let entries = EntryCollection::default();
        // March 2024 starts on a Friday: five leading February days.
        let cells = grid(2024, 2, &entries);
        assert_eq!(cells[0].date, "2024-02-25");
        assert!(!cells[0].in_month);
        assert_eq!(cells[5].date, "2024-03-01");
        assert!(cells[5].in_month);
        assert_eq!(cells[41].date, "2024-04-06");
    }

    #[test]
    fn months_starting_on_sunday_have_no_leading_cells() {
        let entries = EntryCollection::default();
        let cells = grid(2024, 8, &entries);
        assert_eq!(cells[0].date, "2024-09-01");
        assert!(cells[0].in_month);
    }

    #[test]
    fn january_grid_reaches_back_into_the_prior_year() {
        let entries = EntryCollection::default();
        // 2025-01-01 fell on a Wednesday.
        let cells = grid(2025, 0, &entries);
        assert_eq!(cells[0].date, "2024-12-29");
        assert_eq!(cells[0].year, 2024);
        assert_eq!(cells[0].month0, 11);
    }

    #[test]
    fn cells_resolve_moods_and_journals() {
        let mut entries = EntryCollection::default();
        entries.insert(
            "2024-03-05".to_string(),
            entry(MoodKind::Happy, Some("good day")),
        );
        entries.insert("2024-03-12".to_string(), entry(MoodKind::VerySad, None));

        let cells = grid(2024, 2, &entries);
        let day5 = cells.iter().find(|cell| cell.date == "2024-03-05").unwrap();
        assert_eq!(day5.mood, Some(MoodKind::Happy));
        assert!(day5.has_journal);

        let day12 = cells.iter().find(|cell| cell.date == "2024-03-12").unwrap();
        assert_eq!(day12.mood, Some(MoodKind::VerySad));
        assert!(!day12.has_journal);

        let day13 = cells.iter().find(|cell| cell.date == "2024-03-13").unwrap();
        assert_eq!(day13.mood, None);
    }

    #[test]
    fn today_is_flagged_only_on_the_matching_cell() {
        let entries = EntryCollection::default();
        let cells = grid(2026, 0, &entries);
        let flagged: Vec<_> = cells.iter().filter(|cell| cell.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, "2026-01-05");
    }

    #[test]
    fn rebuilding_yields_identical_output() {
        let mut entries = EntryCollection::default();
        entries.insert("2024-02-29".to_string(), entry(MoodKind::Neutral, None));
        assert_eq!(grid(2024, 1, &entries), grid(2024, 1, &entries));
    }
}
