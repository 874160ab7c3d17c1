use crate::moods::MoodKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const JOURNAL_MAX_CHARS: usize = 100;
pub const DEFAULT_INTENSITY: u8 = 5;
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// One journaled day. A record only exists once a mood has been chosen;
/// everything else is optional detail layered on top of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub mood: MoodKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default = "default_intensity")]
    pub intensity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

fn default_intensity() -> u8 {
    DEFAULT_INTENSITY
}

impl Entry {
    pub fn has_journal(&self) -> bool {
        self.journal.as_deref().is_some_and(|text| !text.is_empty())
    }
}

/// All entries for the session, keyed by canonical `YYYY-MM-DD` string.
pub type EntryCollection = BTreeMap<String, Entry>;

/// A partial update against one date. `None` means "leave the stored
/// value alone", so callers never have to re-supply fields they are not
/// changing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub mood: Option<MoodKind>,
    pub journal: Option<String>,
    pub tags: Option<Vec<String>>,
    pub intensity: Option<u8>,
    pub photo_url: Option<String>,
}

/// The one place optional-field fallback happens. Returns `None` when
/// neither side carries a mood: such a record must never be persisted.
pub fn merge_entry(existing: Option<&Entry>, patch: &EntryPatch) -> Option<Entry> {
    let mood = patch.mood.or(existing.map(|entry| entry.mood))?;
    let mut tags = patch
        .tags
        .clone()
        .or_else(|| existing.map(|entry| entry.tags.clone()))
        .unwrap_or_default();
    dedupe_tags(&mut tags);
    Some(Entry {
        mood,
        journal: patch
            .journal
            .clone()
            .or_else(|| existing.and_then(|entry| entry.journal.clone())),
        tags,
        intensity: patch
            .intensity
            .unwrap_or_else(|| existing.map_or(DEFAULT_INTENSITY, |entry| entry.intensity)),
        photo_url: patch
            .photo_url
            .clone()
            .or_else(|| existing.and_then(|entry| entry.photo_url.clone())),
    })
}

/// Drops repeated tag ids, keeping first occurrences in order.
pub fn dedupe_tags(tags: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(tags.len());
    tags.retain(|id| {
        if seen.iter().any(|kept| kept == id) {
            false
        } else {
            seen.push(id.clone());
            true
        }
    });
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_custom: bool,
}

// Request bodies.

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub mood: MoodKind,
    pub intensity: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub journal: String,
}

#[derive(Debug, Deserialize)]
pub struct TagsRequest {
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoRequest {
    pub photo_url: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomTagRequest {
    pub name: String,
}

// Response shapes.

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub date: String,
    pub entry: Option<Entry>,
}

#[derive(Debug, Serialize)]
pub struct TagListResponse {
    pub tags: Vec<Tag>,
}

#[derive(Debug, Serialize)]
pub struct MoodInfo {
    pub mood: MoodKind,
    pub emoji: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub score: u8,
}

// Derived-view structures.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub month0: u32,
    pub year: i32,
    pub date: String,
    pub in_month: bool,
    pub is_today: bool,
    pub mood: Option<MoodKind>,
    pub has_journal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub day: u32,
    pub date: String,
    /// `None` is the gap marker: no entry that day. Never zero.
    pub score: Option<u8>,
    pub extreme: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSeries {
    pub year: i32,
    pub month0: u32,
    pub points: Vec<SeriesPoint>,
    pub min_score: Option<u8>,
    pub max_score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixelCell {
    pub day: u32,
    /// False past the end of the month (Feb 30th); such cells carry no
    /// date or color at all, distinct from an un-logged day.
    pub exists: bool,
    pub date: Option<String>,
    pub mood: Option<MoodKind>,
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixelMonth {
    pub month0: u32,
    pub cells: Vec<PixelCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGrid {
    pub year: i32,
    pub months: Vec<PixelMonth>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    pub date: String,
    pub mood: MoodKind,
    pub emoji: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub score: u8,
    pub intensity: u8,
    pub journal: Option<String>,
    pub tags: Vec<String>,
    pub photo_url: Option<String>,
}
