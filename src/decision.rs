/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Decision mapper: thinking-loop output → UI and dashboard directives.
//!
//! [`run_brain`] runs the thinking loop, applies the execution-mode
//! constraints as a separate post-processing step, and maps the result onto
//! the contracts the host UI renders:
//!
//! | Focus | Theme | Motion | Density | Primary action |
//! |-------|-------|--------|---------|----------------|
//! | stabilization, high energy | calm | low | minimal | grounding (no secondary) |
//! | stabilization, other | calm | low | minimal | journal |
//! | enhancement | uplifting | medium | normal | journal |
//! | maintenance | neutral | low | normal | none |
//!
//! # Glimpse mode
//!
//! A glimpse session has no accumulated history. Its result never claims
//! `High` symbolic trust nor `High` confidence, and callers do not persist it
//! (see [`BrainDecisionState::should_persist`]).

use core::fmt;
use core::str::FromStr;

use crate::clock::Millis;
use crate::label::EmotionLabel;
use crate::thinking::{
    run_thinking_loop, BrainObservation, BrainState, EnergyLevel, Focus, SymbolicTrust,
};

/// Raw intensity at or above which confidence is high.
pub const CONFIDENCE_HIGH_INTENSITY: f64 = 8.0;
/// Raw intensity at or below which confidence is low.
pub const CONFIDENCE_LOW_INTENSITY: f64 = 2.0;

// ─── Input ──────────────────────────────────────────────────────────────────

/// Execution mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// A one-off look with no history. Constrained and never persisted.
    Glimpse,
    /// A regular session.
    #[default]
    Full,
}

impl Mode {
    /// Lower-case wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Glimpse => "glimpse",
            Mode::Full => "full",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown execution mode")]
pub struct ParseModeError;

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            m if m.eq_ignore_ascii_case("glimpse") => Ok(Mode::Glimpse),
            m if m.eq_ignore_ascii_case("full") => Ok(Mode::Full),
            _ => Err(ParseModeError),
        }
    }
}

/// Everything [`run_brain`] needs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BrainInput {
    /// Reported mood.
    pub mood: EmotionLabel,
    /// Raw intensity, 0–10.
    pub intensity: f64,
    /// Session minutes, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub session_duration: Option<f64>,
    /// Execution mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: Mode,
}

impl BrainInput {
    /// Full-mode input with no session duration.
    pub fn new(mood: EmotionLabel, intensity: f64) -> Self {
        Self {
            mood,
            intensity,
            session_duration: None,
            mode: Mode::Full,
        }
    }

    /// Attach a session duration in minutes.
    pub fn with_session(mut self, minutes: f64) -> Self {
        self.session_duration = Some(minutes);
        self
    }

    /// Set the execution mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// The mode-free part handed to the thinking loop.
    pub fn observation(&self) -> BrainObservation {
        BrainObservation {
            mood: self.mood,
            intensity: self.intensity,
            session_duration: self.session_duration,
        }
    }
}

// ─── Output contracts ───────────────────────────────────────────────────────

/// Colour mood of the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeTone {
    /// Soft, low contrast.
    Calm,
    /// Default palette.
    Neutral,
    /// Warm, bright.
    Uplifting,
}

/// How much motion the UI uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnimationIntensity {
    /// Little or none.
    Low,
    /// Normal transitions.
    Medium,
}

/// How much content is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContentDensity {
    /// One thing at a time.
    Minimal,
    /// Regular layout.
    Normal,
}

/// UI atmosphere directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UiDecision {
    /// Theme tone.
    pub theme_tone: ThemeTone,
    /// Motion level.
    pub animation_intensity: AnimationIntensity,
    /// Content density.
    pub content_density: ContentDensity,
}

/// The one action the dashboard leads with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimaryAction {
    /// Music player.
    Music,
    /// Journal entry.
    Journal,
    /// Conversation.
    Chat,
    /// Grounding exercise.
    Grounding,
    /// Nothing in particular.
    None,
}

impl PrimaryAction {
    /// Lower-case wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PrimaryAction::Music => "music",
            PrimaryAction::Journal => "journal",
            PrimaryAction::Chat => "chat",
            PrimaryAction::Grounding => "grounding",
            PrimaryAction::None => "none",
        }
    }
}

/// Dashboard directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DashboardDecision {
    /// Text shown above the action card. Same as the thinking-loop reasoning.
    pub reflection_text: &'static str,
    /// Leading action.
    pub primary_action: PrimaryAction,
    /// Whether other actions may be offered alongside.
    pub allow_secondary_actions: bool,
}

/// Recommendation for a second consumer. Mirrors the dashboard decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RecommendationDecision {
    /// Recommended action.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PrimaryAction,
    /// Why.
    pub reason: &'static str,
}

/// How sure the pipeline is about its reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConfidenceLevel {
    /// Raw intensity <= 2.
    Low,
    /// Default.
    Medium,
    /// Raw intensity >= 8, full mode only.
    High,
}

/// The emotional part of the decision, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EmotionalSnapshot {
    /// Observed mood.
    pub interpreted_emotion: EmotionLabel,
    /// Derived arousal.
    pub energy_level: EnergyLevel,
    /// Per-call trust after mode constraints.
    pub trust_level: SymbolicTrust,
}

/// Bookkeeping attached to every decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DecisionMeta {
    /// When the decision was made.
    pub last_updated: Millis,
    /// Confidence after mode constraints.
    pub confidence_level: ConfidenceLevel,
}

/// Final output of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BrainDecisionState {
    /// Emotional reading.
    pub emotional_snapshot: EmotionalSnapshot,
    /// UI atmosphere.
    pub ui_decision: UiDecision,
    /// Dashboard card.
    pub dashboard_decision: DashboardDecision,
    /// Recommendation feed entry.
    pub recommendation_decision: RecommendationDecision,
    /// Timestamp and confidence.
    pub meta: DecisionMeta,
    /// Mode the decision was made in.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub mode: Mode,
}

impl BrainDecisionState {
    /// Whether the caller should store this result. Glimpse results are never stored.
    pub fn should_persist(&self) -> bool {
        self.mode == Mode::Full
    }
}

// ─── Mapping steps ──────────────────────────────────────────────────────────

/// Cap symbolic trust for the given mode. A glimpse never holds `High`.
pub fn apply_mode_constraints(mut state: BrainState, mode: Mode) -> BrainState {
    if mode == Mode::Glimpse && state.trust_level == SymbolicTrust::High {
        tracing::trace!("decision: glimpse caps symbolic trust at medium");
        state.trust_level = SymbolicTrust::Medium;
    }
    state
}

/// Focus → UI atmosphere.
pub fn map_ui(focus: Focus) -> UiDecision {
    match focus {
        Focus::Stabilization => UiDecision {
            theme_tone: ThemeTone::Calm,
            animation_intensity: AnimationIntensity::Low,
            content_density: ContentDensity::Minimal,
        },
        Focus::Enhancement => UiDecision {
            theme_tone: ThemeTone::Uplifting,
            animation_intensity: AnimationIntensity::Medium,
            content_density: ContentDensity::Normal,
        },
        Focus::Maintenance => UiDecision {
            theme_tone: ThemeTone::Neutral,
            animation_intensity: AnimationIntensity::Low,
            content_density: ContentDensity::Normal,
        },
    }
}

/// Focus and energy → dashboard card.
pub fn map_dashboard(state: &BrainState) -> DashboardDecision {
    let (primary_action, allow_secondary_actions) = match (state.focus, state.energy_level) {
        (Focus::Stabilization, EnergyLevel::High) => (PrimaryAction::Grounding, false),
        (Focus::Stabilization, _) => (PrimaryAction::Journal, true),
        (Focus::Enhancement, _) => (PrimaryAction::Journal, true),
        (Focus::Maintenance, _) => (PrimaryAction::None, true),
    };
    DashboardDecision {
        reflection_text: state.reasoning,
        primary_action,
        allow_secondary_actions,
    }
}

/// Raw intensity and mode → confidence. A glimpse never claims `High`.
pub fn confidence_for(intensity: f64, mode: Mode) -> ConfidenceLevel {
    let confidence = if intensity >= CONFIDENCE_HIGH_INTENSITY {
        ConfidenceLevel::High
    } else if intensity <= CONFIDENCE_LOW_INTENSITY {
        ConfidenceLevel::Low
    } else {
        ConfidenceLevel::Medium
    };
    if mode == Mode::Glimpse && confidence == ConfidenceLevel::High {
        return ConfidenceLevel::Medium;
    }
    confidence
}

/// Run the full pipeline for one input.
///
/// Pure: performs no I/O and reads no stored state. `now` only stamps
/// [`DecisionMeta::last_updated`].
pub fn run_brain(input: &BrainInput, now: Millis) -> BrainDecisionState {
    let state = apply_mode_constraints(run_thinking_loop(&input.observation()), input.mode);

    let ui_decision = map_ui(state.focus);
    let dashboard_decision = map_dashboard(&state);
    let recommendation_decision = RecommendationDecision {
        kind: dashboard_decision.primary_action,
        reason: state.reasoning,
    };
    let confidence_level = confidence_for(input.intensity, input.mode);

    tracing::debug!(
        mood = state.interpreted_emotion.as_str(),
        mode = input.mode.as_str(),
        action = dashboard_decision.primary_action.as_str(),
        "decision: mapped"
    );

    BrainDecisionState {
        emotional_snapshot: EmotionalSnapshot {
            interpreted_emotion: state.interpreted_emotion,
            energy_level: state.energy_level,
            trust_level: state.trust_level,
        },
        ui_decision,
        dashboard_decision,
        recommendation_decision,
        meta: DecisionMeta {
            last_updated: now,
            confidence_level,
        },
        mode: input.mode,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
