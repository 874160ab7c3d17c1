use crate::dates::parse_date_key;
use crate::models::{
    dedupe_tags, merge_entry, Entry, EntryCollection, EntryPatch, Tag, JOURNAL_MAX_CHARS,
    MAX_INTENSITY, MIN_INTENSITY,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const ENTRIES_FILE: &str = "entries.json";
pub const CUSTOM_TAGS_FILE: &str = "custom_tags.json";

#[derive(Debug, Clone)]
pub struct StorePaths {
    pub entries: PathBuf,
    pub custom_tags: PathBuf,
}

pub fn resolve_store_paths() -> StorePaths {
    let dir = env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));
    StorePaths {
        entries: dir.join(ENTRIES_FILE),
        custom_tags: dir.join(CUSTOM_TAGS_FILE),
    }
}

/// Loads the full entry collection. A missing or unreadable blob is "no
/// data yet", never an error; individual records are validated into the
/// strict entry shape and dropped when beyond repair.
pub async fn load_entries(path: &Path) -> EntryCollection {
    match read_blob(path).await {
        Some(bytes) => match serde_json::from_slice::<BTreeMap<String, Value>>(&bytes) {
            Ok(raw) => sanitize_entries(raw),
            Err(err) => {
                error!("failed to parse entries blob: {err}");
                EntryCollection::default()
            }
        },
        None => EntryCollection::default(),
    }
}

/// Overwrites the entries blob. Best-effort: failures are logged here and
/// the in-memory collection stays authoritative for the session.
pub async fn save_entries(path: &Path, entries: &EntryCollection) {
    write_blob(path, serde_json::to_vec_pretty(entries)).await;
}

/// Read-merge-write for a single date. Absent patch fields keep whatever
/// the blob already holds. Returns the merged record, or `None` when the
/// merge yields no mood, in which case nothing is written.
pub async fn upsert_entry(path: &Path, date: &str, patch: &EntryPatch) -> Option<Entry> {
    let mut entries = load_entries(path).await;
    let merged = merge_entry(entries.get(date), patch)?;
    entries.insert(date.to_string(), merged.clone());
    save_entries(path, &entries).await;
    Some(merged)
}

pub async fn load_custom_tags(path: &Path) -> Vec<Tag> {
    let tags = match read_blob(path).await {
        Some(bytes) => match serde_json::from_slice::<Vec<Tag>>(&bytes) {
            Ok(tags) => tags,
            Err(err) => {
                error!("failed to parse custom tags blob: {err}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    let mut seen: Vec<String> = Vec::new();
    tags.into_iter()
        .filter(|tag| !tag.id.is_empty() && !tag.name.is_empty())
        .filter(|tag| {
            if seen.iter().any(|kept| kept == &tag.id) {
                false
            } else {
                seen.push(tag.id.clone());
                true
            }
        })
        .map(|tag| Tag {
            is_custom: true,
            ..tag
        })
        .collect()
}

pub async fn save_custom_tags(path: &Path, tags: &[Tag]) {
    write_blob(path, serde_json::to_vec_pretty(tags)).await;
}

async fn read_blob(path: &Path) -> Option<Vec<u8>> {
    match fs::read(path).await {
        Ok(bytes) => Some(bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            None
        }
    }
}

async fn write_blob(path: &Path, payload: Result<Vec<u8>, serde_json::Error>) {
    match payload {
        Ok(bytes) => {
            if let Err(err) = fs::write(path, bytes).await {
                error!("failed to write {}: {err}", path.display());
            }
        }
        Err(err) => error!("failed to serialize {}: {err}", path.display()),
    }
}

fn sanitize_entries(raw: BTreeMap<String, Value>) -> EntryCollection {
    let mut entries = EntryCollection::default();
    for (key, value) in raw {
        if parse_date_key(&key).is_none() {
            warn!("dropping entry with invalid date key {key:?}");
            continue;
        }
        match serde_json::from_value::<Entry>(value) {
            Ok(mut entry) => {
                entry.intensity = entry.intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
                if let Some(journal) = entry.journal.as_mut() {
                    if journal.chars().count() > JOURNAL_MAX_CHARS {
                        *journal = journal.chars().take(JOURNAL_MAX_CHARS).collect();
                    }
                }
                dedupe_tags(&mut entry.tags);
                entries.insert(key, entry);
            }
            Err(err) => warn!("dropping malformed entry for {key}: {err}"),
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moods::MoodKind;

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "mood_journal_{name}_{}_{nanos}.json",
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn missing_blob_loads_empty() {
        let path = scratch_path("missing");
        assert!(load_entries(&path).await.is_empty());
        assert!(load_custom_tags(&path).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_blob_loads_empty() {
        let path = scratch_path("malformed");
        fs::write(&path, b"not json at all").await.unwrap();
        assert!(load_entries(&path).await.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn upsert_then_load_round_trips_the_merge() {
        let path = scratch_path("roundtrip");

        let first = EntryPatch {
            mood: Some(MoodKind::Happy),
            tags: Some(vec!["work".into()]),
            ..EntryPatch::default()
        };
        upsert_entry(&path, "2024-03-05", &first).await.unwrap();

        let second = EntryPatch {
            journal: Some("shipped the release".into()),
            ..EntryPatch::default()
        };
        let merged = upsert_entry(&path, "2024-03-05", &second).await.unwrap();

        let loaded = load_entries(&path).await;
        let entry = loaded.get("2024-03-05").unwrap();
        assert_eq!(entry, &merged);
        assert_eq!(entry.mood, MoodKind::Happy);
        assert_eq!(entry.journal.as_deref(), Some("shipped the release"));
        assert_eq!(entry.tags, vec!["work".to_string()]);
        assert_eq!(entry.intensity, 5);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn moodless_upsert_writes_nothing() {
        let path = scratch_path("moodless");
        let patch = EntryPatch {
            journal: Some("no mood yet".into()),
            ..EntryPatch::default()
        };
        assert_eq!(upsert_entry(&path, "2024-03-05", &patch).await, None);
        assert!(load_entries(&path).await.is_empty());
    }

    #[tokio::test]
    async fn load_validates_stored_records() {
        let path = scratch_path("validate");
        let blob = serde_json::json!({
            "2024-03-05": { "mood": "happy", "intensity": 42 },
            "2024-03-06": { "journal": "mood went missing" },
            "2024-03-07": { "mood": "confused" },
            "not-a-date": { "mood": "sad" },
            "2024-03-08": {
                "mood": "neutral",
                "tags": ["work", "work", "relax"],
                "journal": "x".repeat(500)
            }
        });
        fs::write(&path, serde_json::to_vec(&blob).unwrap())
            .await
            .unwrap();

        let loaded = load_entries(&path).await;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("2024-03-05").unwrap().intensity, 10);
        let long = loaded.get("2024-03-08").unwrap();
        assert_eq!(long.tags, vec!["work".to_string(), "relax".to_string()]);
        assert_eq!(
            long.journal.as_ref().unwrap().chars().count(),
            JOURNAL_MAX_CHARS
        );
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn custom_tags_round_trip_and_coerce() {
        let path = scratch_path("tags");
        let tags = vec![
            Tag {
                id: "morning-run".into(),
                name: "Morning Run".into(),
                is_custom: true,
            },
            Tag {
                id: "morning-run".into(),
                name: "Duplicate".into(),
                is_custom: false,
            },
        ];
        save_custom_tags(&path, &tags).await;
        let loaded = load_custom_tags(&path).await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "morning-run");
        assert!(loaded[0].is_custom);
        let _ = fs::remove_file(&path).await;
    }
}
