use crate::dates::parse_date_key;
use crate::models::{EntryCollection, FeedItem};

/// Every entry, newest first. Sorts by parsed calendar date rather than
/// leaning on map iteration order.
pub fn history_feed(entries: &EntryCollection) -> Vec<FeedItem> {
    let mut dated: Vec<_> = entries
        .iter()
        .filter_map(|(key, entry)| {
            let date = parse_date_key(key)?;
            let meta = entry.mood.meta();
            Some((
                date,
                FeedItem {
                    date: key.clone(),
                    mood: entry.mood,
                    emoji: meta.emoji,
                    label: meta.label,
                    color: meta.color,
                    score: entry.mood.score(),
                    intensity: entry.intensity,
                    journal: entry.journal.clone(),
                    tags: entry.tags.clone(),
                    photo_url: entry.photo_url.clone(),
                },
            ))
        })
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn feed_is_newest_first() {
        let mut entries = EntryCollection::default();
        entries.insert("2024-03-05".to_string(), entry(MoodKind::Happy, None));
        entries.insert("2024-12-01".to_string(), entry(MoodKind::Neutral, None));
        entries.insert("2023-06-20".to_string(), entry(MoodKind::Sad, None));

        let feed = history_feed(&entries);
        let dates: Vec<&str> = feed.iter().map(|item| item.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-12-01", "2024-03-05", "2023-06-20"]);
    }

    #[test]
    fn items_carry_entry_fields_and_display_metadata() {
        let mut entries = EntryCollection::default();
        entries.insert(
            "2024-03-05".to_string(),
            entry(MoodKind::VeryHappy, Some("great day")),
        );

        let feed = history_feed(&entries);
        assert_eq!(feed.len(), 1);
        let item = &feed[0];
        assert_eq!(item.mood, MoodKind::VeryHappy);
        assert_eq!(item.score, 5);
        assert_eq!(item.emoji, "😊");
        assert_eq!(item.label, "Very Happy");
        assert_eq!(item.journal.as_deref(), Some("great day"));
    }

    #[test]
    fn empty_collection_yields_empty_feed() {
        assert!(history_feed(&EntryCollection::default()).is_empty());
    }
}
