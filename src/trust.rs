/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Slowly accumulating relational trust with absence decay.
//!
//! - [`TrustModel`]: a scalar trust level in [0.0, 1.0] plus an interaction counter.
//! - [`TrustStage`]: four-level bucketing of the scalar for display.
//!
//! This is the *persisted, continuous* trust. It is independent of the
//! per-call symbolic trust derived by [`crate::thinking`]; the two are never
//! combined and must not be confused.
//!
//! # Invariants
//!
//! - Level always within [0.0, 1.0].
//! - `interactions` only increases through [`TrustModel::update_trust`].
//! - Live absence is an additive penalty capped at 0.1. Restored absence
//!   (across a persistence boundary) is a multiplicative factor floored at 0.7.

use crate::clock::{minutes_between, Millis, MINUTES_PER_DAY};
use crate::error::{self, ConfigError};
use crate::label::EmotionLabel;

// ─── Config ─────────────────────────────────────────────────────────────────

/// Tunable coefficients for [`TrustModel`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrustConfig {
    /// Starting level, the "cautious" posture. Default 0.15.
    pub initial_level: f64,
    /// Growth per interaction. Default 0.01.
    pub base_growth: f64,
    /// Extra growth when the user disclosed something. Default 0.04.
    pub disclosure_bonus: f64,
    /// Extra growth for an intense distress mood. Default 0.03.
    pub distress_bonus: f64,
    /// Raw (0–10) intensity a distress mood must exceed to earn the bonus. Default 5.
    pub distress_threshold: f64,
    /// Minutes of absence before live interactions are penalised. Default 60.
    pub absence_minutes: f64,
    /// Live penalty per day away. Default 0.03.
    pub absence_penalty_per_day: f64,
    /// Cap on the live absence penalty. Default 0.1.
    pub absence_penalty_cap: f64,
    /// Minutes since the restored interaction before hydrate decays. Default 1440.
    pub restore_decay_minutes: f64,
    /// Multiplicative loss per day on restore. Default 0.05.
    pub restore_decay_per_day: f64,
    /// Lowest restore multiplier. Default 0.7.
    pub restore_decay_floor: f64,
    /// Upper bounds of stranger / acquaintance / friend. Default 0.2, 0.5, 0.8.
    pub stage_thresholds: [f64; 3],
}

impl TrustConfig {
    /// Reject coefficients outside their meaningful ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        error::unit("initial_level", self.initial_level)?;
        error::non_negative("base_growth", self.base_growth)?;
        error::non_negative("disclosure_bonus", self.disclosure_bonus)?;
        error::non_negative("distress_bonus", self.distress_bonus)?;
        error::non_negative("distress_threshold", self.distress_threshold)?;
        error::non_negative("absence_minutes", self.absence_minutes)?;
        error::non_negative("absence_penalty_per_day", self.absence_penalty_per_day)?;
        error::non_negative("absence_penalty_cap", self.absence_penalty_cap)?;
        error::non_negative("restore_decay_minutes", self.restore_decay_minutes)?;
        error::non_negative("restore_decay_per_day", self.restore_decay_per_day)?;
        error::unit("restore_decay_floor", self.restore_decay_floor)?;
        let [a, b, c] = self.stage_thresholds;
        error::unit("stage_thresholds", a)?;
        error::unit("stage_thresholds", c)?;
        if !(a < b && b < c) {
            return Err(ConfigError::UnorderedStages);
        }
        Ok(())
    }
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            initial_level: 0.15,
            base_growth: 0.01,
            disclosure_bonus: 0.04,
            distress_bonus: 0.03,
            distress_threshold: 5.0,
            absence_minutes: 60.0,
            absence_penalty_per_day: 0.03,
            absence_penalty_cap: 0.1,
            restore_decay_minutes: MINUTES_PER_DAY,
            restore_decay_per_day: 0.05,
            restore_decay_floor: 0.7,
            stage_thresholds: [0.2, 0.5, 0.8],
        }
    }
}

// ─── Values ─────────────────────────────────────────────────────────────────

/// What happened in one interaction, as far as trust is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrustSignal {
    /// Mood reported in the interaction, if any.
    pub emotion: Option<EmotionLabel>,
    /// Raw 0–10 intensity of that mood, if known.
    pub intensity: Option<f64>,
    /// The user shared something personal.
    pub disclosed: bool,
}

/// Live trust state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrustReading {
    /// Trust in [0.0, 1.0].
    pub level: f64,
    /// Epoch milliseconds of the last update.
    pub last_interaction: Millis,
    /// Number of updates applied.
    pub interactions: u32,
}

/// Persisted trust as the storage layer hands it back. Every field may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TrustSnapshot {
    /// Stored level.
    pub level: Option<f64>,
    /// Stored last-interaction time.
    pub last_interaction: Option<Millis>,
    /// Stored interaction count.
    pub interactions: Option<u32>,
}

impl From<TrustReading> for TrustSnapshot {
    fn from(r: TrustReading) -> Self {
        Self {
            level: Some(r.level),
            last_interaction: Some(r.last_interaction),
            interactions: Some(r.interactions),
        }
    }
}

/// Symbolic bucketing of the trust scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrustStage {
    /// Below 0.2.
    Stranger,
    /// Below 0.5.
    Acquaintance,
    /// Below 0.8.
    Friend,
    /// 0.8 and above.
    Confidant,
}

impl TrustStage {
    /// Bucket `level` with the given upper bounds.
    pub fn from_level(level: f64, thresholds: &[f64; 3]) -> Self {
        if level < thresholds[0] {
            TrustStage::Stranger
        } else if level < thresholds[1] {
            TrustStage::Acquaintance
        } else if level < thresholds[2] {
            TrustStage::Friend
        } else {
            TrustStage::Confidant
        }
    }

    /// Lower-case wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TrustStage::Stranger => "stranger",
            TrustStage::Acquaintance => "acquaintance",
            TrustStage::Friend => "friend",
            TrustStage::Confidant => "confidant",
        }
    }
}

// ─── Model ──────────────────────────────────────────────────────────────────

/// Relational trust accumulated across interactions.
#[derive(Clone, Debug)]
pub struct TrustModel {
    config: TrustConfig,
    state: TrustReading,
}

impl TrustModel {
    /// Fresh model at the cautious starting level, last interaction `now`.
    pub fn new(now: Millis) -> Self {
        let config = TrustConfig::default();
        let state = Self::initial(&config, now);
        Self { config, state }
    }

    /// Fresh model with custom coefficients.
    pub fn with_config(config: TrustConfig, now: Millis) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = Self::initial(&config, now);
        Ok(Self { config, state })
    }

    fn initial(config: &TrustConfig, now: Millis) -> TrustReading {
        TrustReading {
            level: config.initial_level,
            last_interaction: now,
            interactions: 0,
        }
    }

    /// Coefficients in use.
    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// Apply one interaction.
    ///
    /// ```text
    /// delta  = base_growth
    ///        + disclosure_bonus           if disclosed
    ///        + distress_bonus             if emotion ∈ {sad, anxious, stressed} and intensity > 5
    ///        − min(cap, days_away × 0.03) if minutes since last interaction > 60
    /// level' = clamp(level + delta, 0, 1)
    /// ```
    pub fn update_trust(&mut self, signal: TrustSignal, now: Millis) -> TrustReading {
        let c = &self.config;
        let mut delta = c.base_growth;

        if signal.disclosed {
            delta += c.disclosure_bonus;
        }

        let intensity = signal.intensity.unwrap_or(0.0);
        if signal.emotion.is_some_and(|e| e.is_distress()) && intensity > c.distress_threshold {
            delta += c.distress_bonus;
        }

        let minutes = minutes_between(self.state.last_interaction, now);
        if minutes > c.absence_minutes {
            let days_away = minutes / MINUTES_PER_DAY;
            let penalty = (days_away * c.absence_penalty_per_day).min(c.absence_penalty_cap);
            tracing::debug!(days_away, penalty, "trust: absence penalty");
            delta -= penalty;
        }

        self.state = TrustReading {
            level: (self.state.level + delta).clamp(0.0, 1.0),
            last_interaction: now,
            interactions: self.state.interactions.saturating_add(1),
        };
        self.state
    }

    /// Restore persisted trust.
    ///
    /// `None` is a no-op. A missing level falls back to the initial level and a
    /// missing timestamp to `now`. If more than a day has passed since the
    /// restored interaction, the level is scaled by
    /// `max(0.7, 1 − days_away × 0.05)`.
    pub fn hydrate(&mut self, snapshot: Option<TrustSnapshot>, now: Millis) {
        let Some(snapshot) = snapshot else {
            return;
        };
        let c = &self.config;

        let mut level = match snapshot.level {
            Some(l) if !l.is_nan() => l.clamp(0.0, 1.0),
            _ => c.initial_level,
        };
        let last_interaction = snapshot.last_interaction.unwrap_or(now);

        let minutes = minutes_between(last_interaction, now);
        if minutes > c.restore_decay_minutes {
            let days_away = minutes / MINUTES_PER_DAY;
            let factor = (1.0 - days_away * c.restore_decay_per_day).max(c.restore_decay_floor);
            tracing::debug!(days_away, factor, "trust: restored after absence");
            level *= factor;
        }

        self.state = TrustReading {
            level,
            last_interaction,
            interactions: snapshot.interactions.unwrap_or(0),
        };
    }

    /// Current state for persistence.
    pub fn export_state(&self) -> TrustReading {
        self.state
    }

    /// Current level in [0.0, 1.0].
    pub fn trust_level(&self) -> f64 {
        self.state.level
    }

    /// Current level bucketed into a [`TrustStage`].
    pub fn trust_stage(&self) -> TrustStage {
        TrustStage::from_level(self.state.level, &self.config.stage_thresholds)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
