use chrono::{Datelike, Local, Months, NaiveDate};

/// Canonical entry key, local calendar fields, zero-padded.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Today on the local wall clock. Everything that asks "what day is it"
/// goes through here so the calendar, the keys, and `is_today` agree.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_key() -> String {
    date_key(today())
}

pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// First day of the month, `month0` being 0-indexed (0 = January).
pub fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, 1)
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let Some(first) = first_of_month(year, month0) else {
        return 0;
    };
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 0,
    }
}

/// Weekday of the 1st, Sunday = 0.
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    first_of_month(year, month0)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_length_tracks_leap_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
    }

    #[test]
    fn month_lengths_for_a_full_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month0, days) in expected.into_iter().enumerate() {
            assert_eq!(days_in_month(2023, month0 as u32), days);
        }
    }

    #[test]
    fn first_weekday_uses_sunday_zero() {
        // 2024-09-01 fell on a Sunday, 2024-03-01 on a Friday.
        assert_eq!(first_weekday_of_month(2024, 8), 0);
        assert_eq!(first_weekday_of_month(2024, 2), 5);
        // 2024-06-01 fell on a Saturday.
        assert_eq!(first_weekday_of_month(2024, 5), 6);
    }

    #[test]
    fn date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(date_key(date), "2026-01-05");
    }

    #[test]
    fn parse_date_key_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date_key(&date_key(date)), Some(date));
    }

    #[test]
    fn parse_date_key_rejects_garbage() {
        assert_eq!(parse_date_key(""), None);
        assert_eq!(parse_date_key("2024-13-01"), None);
        assert_eq!(parse_date_key("2023-02-29"), None);
        assert_eq!(parse_date_key("yesterday"), None);
    }

    #[test]
    fn invalid_months_fall_back_to_zero() {
        assert_eq!(days_in_month(2024, 12), 0);
        assert_eq!(first_weekday_of_month(2024, 12), 0);
    }
}
