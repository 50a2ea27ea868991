//! Mood filter set.
//!
//! Moods are a closed set of dining-occasion intents. Each mood has a fixed
//! label and a two-tone color pairing (resting vs selected) expressed as
//! abstract [`Tone`]s so the core stays free of terminal styling; the theme
//! maps tones to concrete colors.

use serde::{Deserialize, Serialize};

/// A dining-occasion intent used as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodType {
    Impress,
    Chill,
    Romantic,
    Friends,
    Family,
    Quick,
}

/// Abstract color families a theme resolves to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
}

/// Background and border tones for one chip state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneSet {
    pub background: Tone,
    pub border: Tone,
}

/// Static display configuration for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodConfig {
    pub label: &'static str,
    pub resting: ToneSet,
    pub selected: ToneSet,
}

const RESTING: ToneSet = ToneSet {
    background: Tone::Neutral,
    border: Tone::Neutral,
};

impl MoodType {
    /// Returns all moods in display order.
    #[must_use]
    pub const fn all() -> &'static [MoodType] {
        &[
            MoodType::Impress,
            MoodType::Chill,
            MoodType::Romantic,
            MoodType::Friends,
            MoodType::Family,
            MoodType::Quick,
        ]
    }

    /// Returns the display configuration for this mood.
    #[must_use]
    pub const fn config(self) -> MoodConfig {
        let (label, selected) = match self {
            Self::Impress => ("Impress", Tone::Accent),
            Self::Chill => ("Something Chill", Tone::Secondary),
            Self::Romantic => ("Romantic", Tone::Primary),
            Self::Friends => ("With Friends", Tone::Success),
            Self::Family => ("Family Friendly", Tone::Warning),
            Self::Quick => ("Quick Bite", Tone::Error),
        };
        MoodConfig {
            label,
            resting: RESTING,
            selected: ToneSet {
                background: selected,
                border: selected,
            },
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.config().label
    }
}

/// Applies a mood press to the current selection.
///
/// Pressing the active mood clears it; pressing any other mood replaces it.
#[must_use]
pub fn toggle_mood(current: Option<MoodType>, pressed: MoodType) -> Option<MoodType> {
    if current == Some(pressed) {
        None
    } else {
        Some(pressed)
    }
}
