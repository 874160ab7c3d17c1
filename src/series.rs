use crate::dates::{date_key, days_in_month, first_of_month};
use crate::models::{EntryCollection, MonthSeries, SeriesPoint};
use chrono::Duration;

/// One sample per day of the month: the day's mood score, or a gap when
/// nothing was logged. Samples attaining the month's minimum or maximum
/// score are flagged for chart emphasis; when every logged day scores the
/// same, they all are.
pub fn month_series(year: i32, month0: u32, entries: &EntryCollection) -> MonthSeries {
    let mut points = Vec::new();
    if let Some(first) = first_of_month(year, month0) {
        for offset in 0..days_in_month(year, month0) {
            let date = first + Duration::days(i64::from(offset));
            let key = date_key(date);
            let score = entries.get(&key).map(|entry| entry.mood.score());
            points.push(SeriesPoint {
                day: offset + 1,
                date: key,
                score,
                extreme: false,
            });
        }
    }

    let scores: Vec<u8> = points.iter().filter_map(|point| point.score).collect();
    let min_score = scores.iter().copied().min();
    let max_score = scores.iter().copied().max();
    for point in &mut points {
        if let Some(score) = point.score {
            point.extreme = Some(score) == min_score || Some(score) == max_score;
        }
    }

    MonthSeries {
        year,
        month0,
        points,
        min_score,
        max_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryPatch, merge_entry};
    use crate::moods::MoodKind;

    fn entry(mood: MoodKind) -> Entry {
        merge_entry(
            None,
            &EntryPatch {
                mood: Some(mood),
                ..EntryPatch::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn march_2024_scenario() {
        let mut entries = EntryCollection::default();
        entries.insert("2024-03-05".to_string(), entry(MoodKind::Happy));
        entries.insert("2024-03-12".to_string(), entry(MoodKind::VerySad));

        let series = month_series(2024, 2, &entries);
        assert_eq!(series.points.len(), 31);
        assert_eq!(series.min_score, Some(1));
        assert_eq!(series.max_score, Some(4));

        for point in &series.points {
            match point.day {
                5 => {
                    assert_eq!(point.score, Some(4));
                    assert!(point.extreme);
                }
                12 => {
                    assert_eq!(point.score, Some(1));
                    assert!(point.extreme);
                }
                _ => {
                    assert_eq!(point.score, None);
                    assert!(!point.extreme);
                }
            }
        }
    }

    #[test]
    fn gaps_are_absent_not_zero() {
        let series = month_series(2024, 2, &EntryCollection::default());
        assert!(series.points.iter().all(|point| point.score.is_none()));
        assert_eq!(series.min_score, None);
        assert_eq!(series.max_score, None);
        assert!(series.points.iter().all(|point| !point.extreme));
    }

    #[test]
    fn flat_months_flag_every_logged_day() {
        let mut entries = EntryCollection::default();
        entries.insert("2024-03-03".to_string(), entry(MoodKind::Neutral));
        entries.insert("2024-03-17".to_string(), entry(MoodKind::Neutral));
        entries.insert("2024-03-28".to_string(), entry(MoodKind::Neutral));

        let series = month_series(2024, 2, &entries);
        assert_eq!(series.min_score, Some(3));
        assert_eq!(series.max_score, Some(3));
        let flagged: Vec<u32> = series
            .points
            .iter()
            .filter(|point| point.extreme)
            .map(|point| point.day)
            .collect();
        assert_eq!(flagged, vec![3, 17, 28]);
    }

    #[test]
    fn single_logged_day_is_the_sole_extreme() {
        let mut entries = EntryCollection::default();
        entries.insert("2024-03-09".to_string(), entry(MoodKind::Sad));
        let series = month_series(2024, 2, &entries);
        let flagged: Vec<u32> = series
            .points
            .iter()
            .filter(|point| point.extreme)
            .map(|point| point.day)
            .collect();
        assert_eq!(flagged, vec![9]);
    }

    #[test]
    fn only_middle_scores_stay_unflagged() {
        let mut entries = EntryCollection::default();
        entries.insert("2024-03-01".to_string(), entry(MoodKind::VerySad));
        entries.insert("2024-03-02".to_string(), entry(MoodKind::Neutral));
        entries.insert("2024-03-03".to_string(), entry(MoodKind::VeryHappy));
        entries.insert("2024-03-04".to_string(), entry(MoodKind::VeryHappy));

        let series = month_series(2024, 2, &entries);
        let flagged: Vec<u32> = series
            .points
            .iter()
            .filter(|point| point.extreme)
            .map(|point| point.day)
            .collect();
        assert_eq!(flagged, vec![1, 3, 4]);
    }

    #[test]
    fn february_series_length_tracks_leap_years() {
        let entries = EntryCollection::default();
        assert_eq!(month_series(2024, 1, &entries).points.len(), 29);
        assert_eq!(month_series(2023, 1, &entries).points.len(), 28);
    }

    #[test]
    fn rebuilding_yields_identical_output() {
        let mut entries = EntryCollection::default();
        entries.insert("2024-03-05".to_string(), entry(MoodKind::Happy));
        assert_eq!(
            month_series(2024, 2, &entries),
            month_series(2024, 2, &entries)
        );
    }
}
