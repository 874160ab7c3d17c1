use crate::models::{dedupe_tags, merge_entry, Entry, EntryCollection, EntryPatch, Tag};

/// Tags every install ships with. Never persisted, always available.
pub const DEFAULT_TAGS: [(&str, &str); 6] = [
    ("work", "Work"),
    ("friends", "Friends"),
    ("exercise", "Exercise"),
    ("relax", "Relax"),
    ("family", "Family"),
    ("hobby", "Hobby"),
];

pub fn default_tags() -> Vec<Tag> {
    DEFAULT_TAGS
        .into_iter()
        .map(|(id, name)| Tag {
            id: id.to_string(),
            name: name.to_string(),
            is_custom: false,
        })
        .collect()
}

/// Tag id derived from a display name: lowercase, whitespace runs
/// collapsed to single hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// The session's authoritative state: every entry plus the custom tag
/// list, hydrated once at startup. Mutations merge in memory first; the
/// caller then writes the same fields through the persistence gateway.
#[derive(Debug, Default)]
pub struct Store {
    entries: EntryCollection,
    custom_tags: Vec<Tag>,
}

impl Store {
    pub fn new(entries: EntryCollection, custom_tags: Vec<Tag>) -> Self {
        let defaults = default_tags();
        let custom_tags = custom_tags
            .into_iter()
            .filter(|tag| !defaults.iter().any(|default| default.id == tag.id))
            .collect();
        Self {
            entries,
            custom_tags,
        }
    }

    pub fn entries(&self) -> &EntryCollection {
        &self.entries
    }

    pub fn entry(&self, date: &str) -> Option<&Entry> {
        self.entries.get(date)
    }

    pub fn custom_tags(&self) -> &[Tag] {
        &self.custom_tags
    }

    /// Defaults first, then customs. Ids are unique across the whole set.
    pub fn available_tags(&self) -> Vec<Tag> {
        let mut tags = default_tags();
        tags.extend(self.custom_tags.iter().cloned());
        tags
    }

    /// Merges the patch over the in-memory entry for `date` and stores
    /// the result. `None` (and no insert) when the merge carries no mood:
    /// journal or tag edits for an unlogged day stay transient.
    pub fn apply(&mut self, date: &str, patch: &EntryPatch) -> Option<Entry> {
        let merged = merge_entry(self.entries.get(date), patch)?;
        self.entries.insert(date.to_string(), merged.clone());
        Some(merged)
    }

    /// Adds a custom tag by display name. `None` when the derived slug is
    /// empty or already taken; a duplicate add leaves the set unchanged.
    pub fn add_custom_tag(&mut self, name: &str) -> Option<Tag> {
        let id = slugify(name);
        if id.is_empty() {
            return None;
        }
        if self.available_tags().iter().any(|tag| tag.id == id) {
            return None;
        }
        let tag = Tag {
            id,
            name: name.trim().to_string(),
            is_custom: true,
        };
        self.custom_tags.push(tag.clone());
        Some(tag)
    }

    /// Removes a custom tag and strips its id from every entry's tag
    /// sequence. Default tags are not removable. Returns whether anything
    /// changed.
    pub fn remove_custom_tag(&mut self, id: &str) -> bool {
        let before = self.custom_tags.len();
        self.custom_tags.retain(|tag| tag.id != id);
        if self.custom_tags.len() == before {
            return false;
        }
        for entry in self.entries.values_mut() {
            entry.tags.retain(|tag_id| tag_id != id);
        }
        true
    }

    /// Replaces the tag sequence for a logged day, de-duplicated,
    /// preserving order. No-op for unlogged days.
    pub fn set_tags(&mut self, date: &str, mut tags: Vec<String>) -> Option<Entry> {
        dedupe_tags(&mut tags);
        self.apply(
            date,
            &EntryPatch {
                tags: Some(tags),
                ..EntryPatch::default()
            },
        )
    }
}
