/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! The thinking loop: Observe → Interpret → Decide → Learn.
//!
//! A pure transform from one [`BrainObservation`] to a [`BrainState`]. No
//! stored state is read or written, so identical input always yields identical
//! output. Each stage is exposed on its own for callers that want to inspect
//! the intermediate values.
//!
//! ```text
//! BrainObservation ─observe→ Observed ─interpret→ Interpretation ─decide→ Decision ─learn→ BrainState
//! ```
//!
//! Execution mode never reaches this module. Mode constraints are applied
//! afterwards by [`crate::decision`].
//!
//! # Symbolic trust
//!
//! [`SymbolicTrust`] is derived per call from intensity and session length. It
//! is unrelated to the persisted scalar in [`crate::trust`].

use crate::label::EmotionLabel;

/// Raw intensity above which a happy mood reads as high energy.
pub const HAPPY_HIGH_ENERGY: f64 = 7.0;
/// Intensity above which symbolic trust reaches medium.
pub const TRUST_MEDIUM_INTENSITY: f64 = 6.0;
/// Session minutes above which symbolic trust reaches medium.
pub const TRUST_MEDIUM_SESSION: f64 = 10.0;
/// Intensity above which symbolic trust reaches high.
pub const TRUST_HIGH_INTENSITY: f64 = 8.0;
/// Session minutes above which symbolic trust reaches high.
pub const TRUST_HIGH_SESSION: f64 = 30.0;

/// Rationale for de-escalating a high-arousal state.
pub const REASON_DEESCALATE: &str =
    "High arousal detected. De-escalating first: slowing things down and offering grounding.";
/// Rationale for a low-energy state.
pub const REASON_GENTLE: &str =
    "Energy is low. Offering gentle support without asking for much.";
/// Rationale for a positive state.
pub const REASON_ANCHOR: &str =
    "A positive state is present. Helping anchor it so it lasts.";
/// Rationale when nothing calls for intervention.
pub const REASON_STANDBY: &str =
    "Things look steady. Standing by without intervening.";

// ─── Types ──────────────────────────────────────────────────────────────────

/// A mood report as it arrives from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BrainObservation {
    /// Reported mood.
    pub mood: EmotionLabel,
    /// Raw intensity on the 0–10 scale. Not the model's 0–1 scale.
    pub intensity: f64,
    /// Minutes spent in the current session, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub session_duration: Option<f64>,
}

impl BrainObservation {
    /// Observation with no session duration.
    pub fn new(mood: EmotionLabel, intensity: f64) -> Self {
        Self {
            mood,
            intensity,
            session_duration: None,
        }
    }

    /// Attach a session duration in minutes.
    pub fn with_session(mut self, minutes: f64) -> Self {
        self.session_duration = Some(minutes);
        self
    }
}

/// Coarse arousal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EnergyLevel {
    /// Depleted.
    Low,
    /// Ordinary.
    Medium,
    /// Activated.
    High,
}

/// Per-call trust signal derived from how intense and how long the session is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymbolicTrust {
    /// Default.
    Low,
    /// Intensity > 6 or session > 10 min.
    Medium,
    /// Intensity > 8 or session > 30 min.
    High,
}

/// What the response should try to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Focus {
    /// Calm things down.
    Stabilization,
    /// Build on a good state.
    Enhancement,
    /// Keep out of the way.
    Maintenance,
}

/// Output of the observe stage: the observation with inputs normalised.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observed {
    /// Reported mood.
    pub mood: EmotionLabel,
    /// Intensity clamped to [0, 10].
    pub intensity: f64,
    /// Session minutes, 0 when absent.
    pub session_duration: f64,
}

/// Output of the interpret stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interpretation {
    /// Derived arousal.
    pub energy_level: EnergyLevel,
    /// Derived per-call trust.
    pub trust_level: SymbolicTrust,
}

/// Output of the decide stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Chosen strategy.
    pub focus: Focus,
    /// Human-readable rationale. Display only.
    pub reasoning: &'static str,
}

/// Final output of the thinking loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BrainState {
    /// The observed mood, passed through.
    pub interpreted_emotion: EmotionLabel,
    /// Derived arousal.
    pub energy_level: EnergyLevel,
    /// Derived per-call trust.
    pub trust_level: SymbolicTrust,
    /// Human-readable rationale.
    pub reasoning: &'static str,
    /// Chosen strategy.
    pub focus: Focus,
}

// ─── Stages ─────────────────────────────────────────────────────────────────

/// Observe: clamp intensity to [0, 10] and default the session length to 0.
pub fn observe(obs: &BrainObservation) -> Observed {
    let intensity = if obs.intensity.is_nan() {
        0.0
    } else {
        obs.intensity.clamp(0.0, 10.0)
    };
    let session_duration = match obs.session_duration {
        Some(m) if m > 0.0 => m,
        _ => 0.0,
    };
    Observed {
        mood: obs.mood,
        intensity,
        session_duration,
    }
}

/// Interpret: derive energy and symbolic trust.
///
/// The two trust thresholds are checked independently: a long session
/// reaches `High` even at low intensity.
pub fn interpret(o: &Observed) -> Interpretation {
    let energy_level = if o.mood.is_high_arousal() {
        EnergyLevel::High
    } else if o.mood.is_low_arousal() {
        EnergyLevel::Low
    } else if o.mood == EmotionLabel::Happy && o.intensity > HAPPY_HIGH_ENERGY {
        EnergyLevel::High
    } else {
        EnergyLevel::Medium
    };

    let mut trust_level = SymbolicTrust::Low;
    if o.intensity > TRUST_MEDIUM_INTENSITY || o.session_duration > TRUST_MEDIUM_SESSION {
        trust_level = SymbolicTrust::Medium;
    }
    if o.intensity > TRUST_HIGH_INTENSITY || o.session_duration > TRUST_HIGH_SESSION {
        trust_level = SymbolicTrust::High;
    }

    Interpretation {
        energy_level,
        trust_level,
    }
}

/// Decide: pick a focus.
///
/// Order matters. High energy is checked before happiness, but only for
/// non-happy moods, so a high-energy happy state lands on `Enhancement`.
pub fn decide(o: &Observed, i: &Interpretation) -> Decision {
    let (focus, reasoning) = if i.energy_level == EnergyLevel::High && o.mood != EmotionLabel::Happy {
        (Focus::Stabilization, REASON_DEESCALATE)
    } else if i.energy_level == EnergyLevel::Low {
        (Focus::Stabilization, REASON_GENTLE)
    } else if o.mood == EmotionLabel::Happy {
        (Focus::Enhancement, REASON_ANCHOR)
    } else {
        (Focus::Maintenance, REASON_STANDBY)
    };
    Decision { focus, reasoning }
}

/// Learn: package the stages into a [`BrainState`]. No side effects.
pub fn learn(o: &Observed, i: &Interpretation, d: &Decision) -> BrainState {
    BrainState {
        interpreted_emotion: o.mood,
        energy_level: i.energy_level,
        trust_level: i.trust_level,
        reasoning: d.reasoning,
        focus: d.focus,
    }
}

/// Run all four stages.
pub fn run_thinking_loop(obs: &BrainObservation) -> BrainState {
    let observed = observe(obs);
    let interpretation = interpret(&observed);
    let decision = decide(&observed, &interpretation);
    learn(&observed, &interpretation, &decision)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mood: EmotionLabel, intensity: f64, session: Option<f64>) -> BrainState {
        run_thinking_loop(&BrainObservation {
            mood,
            intensity,
            session_duration: session,
        })
    }

    #[test]
    fn test_observe_clamps_and_defaults() {
        let o = observe(&BrainObservation::new(EmotionLabel::Sad, 14.0));
        assert_eq!(o.intensity, 10.0);
        assert_eq!(o.session_duration, 0.0);

        let o = observe(&BrainObservation::new(EmotionLabel::Sad, -2.0).with_session(12.0));
        assert_eq!(o.intensity, 0.0);
        assert_eq!(o.session_duration, 12.0);
    }

    #[test]
    fn test_energy_by_mood() {
        for mood in [EmotionLabel::Anxious, EmotionLabel::Stressed, EmotionLabel::Angry] {
            assert_eq!(run(mood, 1.0, None).energy_level, EnergyLevel::High, "{mood}");
        }
        assert_eq!(run(EmotionLabel::Sad, 9.0, None).energy_level, EnergyLevel::Low);
        assert_eq!(run(EmotionLabel::Neutral, 9.0, None).energy_level, EnergyLevel::Medium);
        assert_eq!(run(EmotionLabel::Confused, 9.0, None).energy_level, EnergyLevel::Medium);
    }

    #[test]
    fn test_happy_energy_threshold() {
        assert_eq!(run(EmotionLabel::Happy, 7.0, None).energy_level, EnergyLevel::Medium);
        assert_eq!(run(EmotionLabel::Happy, 7.5, None).energy_level, EnergyLevel::High);
    }

    #[test]
    fn test_symbolic_trust_thresholds() {
        assert_eq!(run(EmotionLabel::Neutral, 6.0, None).trust_level, SymbolicTrust::Low);
        assert_eq!(run(EmotionLabel::Neutral, 6.5, None).trust_level, SymbolicTrust::Medium);
        assert_eq!(run(EmotionLabel::Neutral, 8.5, None).trust_level, SymbolicTrust::High);
        assert_eq!(run(EmotionLabel::Neutral, 1.0, Some(11.0)).trust_level, SymbolicTrust::Medium);
    }

    #[test]
    fn test_long_session_reaches_high_trust_at_low_intensity() {
        let s = run(EmotionLabel::Neutral, 2.0, Some(35.0));
        assert_eq!(s.trust_level, SymbolicTrust::High);
    }

    #[test]
    fn test_anxious_scenario() {
        let s = run(EmotionLabel::Anxious, 9.0, Some(5.0));
        assert_eq!(s.energy_level, EnergyLevel::High);
        assert_eq!(s.trust_level, SymbolicTrust::High);
        assert_eq!(s.focus, Focus::Stabilization);
        assert_eq!(s.reasoning, REASON_DEESCALATE);
        assert_eq!(s.interpreted_emotion, EmotionLabel::Anxious);
    }

    #[test]
    fn test_sad_is_gentle_stabilization() {
        let s = run(EmotionLabel::Sad, 4.0, None);
        assert_eq!(s.focus, Focus::Stabilization);
        assert_eq!(s.reasoning, REASON_GENTLE);
    }

    #[test]
    fn test_high_energy_happy_is_enhancement() {
        let s = run(EmotionLabel::Happy, 9.0, None);
        assert_eq!(s.energy_level, EnergyLevel::High);
        assert_eq!(s.focus, Focus::Enhancement);
        assert_eq!(s.reasoning, REASON_ANCHOR);
    }

    #[test]
    fn test_neutral_is_maintenance() {
        let s = run(EmotionLabel::Neutral, 5.0, None);
        assert_eq!(s.focus, Focus::Maintenance);
        assert_eq!(s.reasoning, REASON_STANDBY);
        assert_eq!(run(EmotionLabel::Confused, 5.0, None).focus, Focus::Maintenance);
    }

    #[test]
    fn test_deterministic() {
        let obs = BrainObservation::new(EmotionLabel::Stressed, 6.3).with_session(14.0);
        assert_eq!(run_thinking_loop(&obs), run_thinking_loop(&obs));
    }
}
