use serde::{Deserialize, Serialize};

/// The five moods, ordered by valence from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    VerySad,
    Sad,
    Neutral,
    Happy,
    VeryHappy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodMeta {
    pub mood: MoodKind,
    pub emoji: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// Catalog rows in ascending valence order, so `MOODS[score - 1]` is the
/// row for that score.
pub const MOODS: [MoodMeta; 5] = [
    MoodMeta {
        mood: MoodKind::VerySad,
        emoji: "😭",
        label: "Very Sad",
        color: "#f87171",
    },
    MoodMeta {
        mood: MoodKind::Sad,
        emoji: "😟",
        label: "Sad",
        color: "#fb923c",
    },
    MoodMeta {
        mood: MoodKind::Neutral,
        emoji: "😐",
        label: "Neutral",
        color: "#facc15",
    },
    MoodMeta {
        mood: MoodKind::Happy,
        emoji: "🙂",
        label: "Happy",
        color: "#a3e635",
    },
    MoodMeta {
        mood: MoodKind::VeryHappy,
        emoji: "😊",
        label: "Very Happy",
        color: "#4ade80",
    },
];

impl MoodKind {
    pub fn score(self) -> u8 {
        match self {
            MoodKind::VerySad => 1,
            MoodKind::Sad => 2,
            MoodKind::Neutral => 3,
            MoodKind::Happy => 4,
            MoodKind::VeryHappy => 5,
        }
    }

    /// Inverse of `score`. Out-of-range scores mean "no data", never a
    /// default mood.
    pub fn from_score(score: u8) -> Option<MoodKind> {
        match score {
            1 => Some(MoodKind::VerySad),
            2 => Some(MoodKind::Sad),
            3 => Some(MoodKind::Neutral),
            4 => Some(MoodKind::Happy),
            5 => Some(MoodKind::VeryHappy),
            _ => None,
        }
    }

    pub fn meta(self) -> &'static MoodMeta {
        &MOODS[self.score() as usize - 1]
    }
}
