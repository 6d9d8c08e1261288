//! Emotion vocabulary — the closed set of mood categories the pipeline understands.
//!
//! Every stage keys off [`EmotionLabel`]: the inertia table in [`crate::emotion`],
//! the distress bonus in [`crate::trust`], and the arousal classes used by the
//! thinking loop in [`crate::thinking`].
//!
//! Labels travel to and from the host UI as lower-case strings (`"anxious"`,
//! `"happy"`, ...). [`EmotionLabel::as_str`] and the [`FromStr`] impl are the
//! only conversions between the two representations.

use core::fmt;
use core::str::FromStr;

/// One of the seven mood categories a user can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EmotionLabel {
    /// Worried, on edge.
    Anxious,
    /// Low, heavy.
    Sad,
    /// Under pressure.
    Stressed,
    /// Frustrated or irritated.
    Angry,
    /// Unsure, scattered.
    Confused,
    /// Positive, light.
    Happy,
    /// No active affect. Also the reset state below the noise floor.
    Neutral,
}

impl EmotionLabel {
    /// Every label, in declaration order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Anxious,
        EmotionLabel::Sad,
        EmotionLabel::Stressed,
        EmotionLabel::Angry,
        EmotionLabel::Confused,
        EmotionLabel::Happy,
        EmotionLabel::Neutral,
    ];

    /// Lower-case wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Anxious => "anxious",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Stressed => "stressed",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Confused => "confused",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// High-arousal moods: anxious, stressed, angry. Always read as high energy.
    pub const fn is_high_arousal(&self) -> bool {
        matches!(
            self,
            EmotionLabel::Anxious | EmotionLabel::Stressed | EmotionLabel::Angry
        )
    }

    /// Low-arousal moods: sad. Always read as low energy.
    pub const fn is_low_arousal(&self) -> bool {
        matches!(self, EmotionLabel::Sad)
    }

    /// Moods whose intense disclosure deepens trust: sad, anxious, stressed.
    pub const fn is_distress(&self) -> bool {
        matches!(
            self,
            EmotionLabel::Sad | EmotionLabel::Anxious | EmotionLabel::Stressed
        )
    }
}

impl Default for EmotionLabel {
    fn default() -> Self {
        EmotionLabel::Neutral
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name any [`EmotionLabel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion label")]
pub struct ParseLabelError;

impl FromStr for EmotionLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EmotionLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseLabelError)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
