/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Continuous-time emotional reading with decay and inertia-weighted blending.
//!
//! - [`EmotionModel`]: holds at most one [`EmotionReading`] and folds new
//!   observations into it.
//! - [`EmotionConfig`] / [`InertiaTable`]: the tunable coefficients.
//!
//! # Invariants
//!
//! - Stored intensity is always within [0.0, 1.0].
//! - Decay is linear in wall-clock minutes: `intensity − minutes × decay_rate`,
//!   floored at zero, never discretised.
//! - The noise floor is a hard cutoff: a projected intensity below it reads as
//!   `{neutral, 0}` immediately, not as an asymptotic approach to zero.
//! - Reads never mutate. Only [`EmotionModel::update`] and
//!   [`EmotionModel::hydrate`] write.
//!
//! # Scales
//!
//! Observations arrive on the host's raw 0–10 scale. The model stores 0–1.
//! [`EmotionModel::update`] is the only place the two meet.

use hashbrown::HashMap;

use crate::clock::{minutes_between, Millis};
use crate::error::{self, ConfigError};
use crate::label::EmotionLabel;

// ─── Defaults ───────────────────────────────────────────────────────────────

/// Intensity units lost per elapsed minute.
pub const DECAY_RATE: f64 = 0.03;

/// Share of a same-mood observation added on top of the decayed intensity.
pub const BLEND_WEIGHT: f64 = 0.35;

/// Projected intensities below this collapse to `{neutral, 0}`.
pub const NOISE_FLOOR: f64 = 0.15;

/// Multiplier applied to the held mood when a weaker competing mood is observed.
pub const COMPETING_PENALTY: f64 = 0.95;

/// Upper bound of the host's raw intensity scale.
pub const RAW_SCALE: f64 = 10.0;

/// Default inertia per label. Higher resists being overridden.
pub const DEFAULT_INERTIA: [(EmotionLabel, f64); 7] = [
    (EmotionLabel::Anxious, 0.75),
    (EmotionLabel::Sad, 0.65),
    (EmotionLabel::Stressed, 0.6),
    (EmotionLabel::Angry, 0.7),
    (EmotionLabel::Confused, 0.55),
    (EmotionLabel::Neutral, 0.4),
    (EmotionLabel::Happy, 0.3),
];

/// Inertia used for a label missing from a customised table.
const FALLBACK_INERTIA: f64 = 0.4;

/// Round half-up to two decimals. Inputs are non-negative intensities.
fn round2(x: f64) -> f64 {
    ((x * 100.0 + 0.5) as i64) as f64 / 100.0
}

/// Map a raw 0–10 observation onto the 0–1 internal scale.
///
/// NaN reads as no affect; everything else is clamped.
pub fn normalize_raw(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    (raw / RAW_SCALE).clamp(0.0, 1.0)
}

// ─── Inertia table ──────────────────────────────────────────────────────────

/// Per-label resistance to being overridden by a different incoming mood.
///
/// Consulted with the *currently held* label, never the incoming one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InertiaTable {
    values: HashMap<EmotionLabel, f64>,
}

impl InertiaTable {
    /// The standard table (anxious 0.75 … happy 0.3).
    pub fn new() -> Self {
        Self {
            values: DEFAULT_INERTIA.iter().copied().collect(),
        }
    }

    /// Inertia for `label`.
    pub fn get(&self, label: EmotionLabel) -> f64 {
        self.values.get(&label).copied().unwrap_or(FALLBACK_INERTIA)
    }

    /// Override one label's inertia. The value is clamped to [0.0, 1.0].
    pub fn set(&mut self, label: EmotionLabel, inertia: f64) {
        self.values.insert(label, inertia.clamp(0.0, 1.0));
    }

    /// Iterate `(label, inertia)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, f64)> + '_ {
        self.values.iter().map(|(l, v)| (*l, *v))
    }
}

impl Default for InertiaTable {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Config ─────────────────────────────────────────────────────────────────

/// Tunable coefficients for [`EmotionModel`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmotionConfig {
    /// Intensity lost per minute. Default [`DECAY_RATE`].
    pub decay_rate: f64,
    /// Same-mood reinforcement weight. Default [`BLEND_WEIGHT`].
    pub blend_weight: f64,
    /// Reset threshold. Default [`NOISE_FLOOR`].
    pub noise_floor: f64,
    /// Damping for a held mood that beat a weak competitor. Default [`COMPETING_PENALTY`].
    pub competing_penalty: f64,
    /// Per-label inertia.
    pub inertia: InertiaTable,
}

impl EmotionConfig {
    /// Reject coefficients outside their meaningful ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        error::non_negative("decay_rate", self.decay_rate)?;
        error::unit("blend_weight", self.blend_weight)?;
        error::unit("noise_floor", self.noise_floor)?;
        error::unit("competing_penalty", self.competing_penalty)?;
        for (_, v) in self.inertia.iter() {
            error::unit("inertia", v)?;
        }
        Ok(())
    }
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            decay_rate: DECAY_RATE,
            blend_weight: BLEND_WEIGHT,
            noise_floor: NOISE_FLOOR,
            competing_penalty: COMPETING_PENALTY,
            inertia: InertiaTable::new(),
        }
    }
}

// ─── Reading ────────────────────────────────────────────────────────────────

/// A single affective reading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EmotionReading {
    /// Mood category.
    pub label: EmotionLabel,
    /// Strength in [0.0, 1.0]. 0.0 means no active affect.
    pub intensity: f64,
    /// Epoch milliseconds of the last write.
    pub last_updated: Millis,
}

impl EmotionReading {
    /// The reset reading: `{neutral, 0}` stamped at `now`.
    pub fn neutral(now: Millis) -> Self {
        Self {
            label: EmotionLabel::Neutral,
            intensity: 0.0,
            last_updated: now,
        }
    }
}

// ─── Model ──────────────────────────────────────────────────────────────────

/// Holds the current emotional reading and blends new observations into it.
///
/// Starts empty. One instance per user session; callers own it and thread it
/// through explicitly.
#[derive(Clone, Debug, Default)]
pub struct EmotionModel {
    config: EmotionConfig,
    reading: Option<EmotionReading>,
}

impl EmotionModel {
    /// Empty model with the default coefficients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty model with custom coefficients.
    pub fn with_config(config: EmotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            reading: None,
        })
    }

    /// Coefficients in use.
    pub fn config(&self) -> &EmotionConfig {
        &self.config
    }

    /// Intensity of `reading` projected forward to `now`, floored at zero.
    fn decayed(&self, reading: &EmotionReading, now: Millis) -> f64 {
        let minutes = minutes_between(reading.last_updated, now);
        (reading.intensity - minutes * self.config.decay_rate).max(0.0)
    }

    /// Fold an observation into the held reading.
    ///
    /// - `mood`: detected label.
    /// - `raw_intensity`: strength on the host's 0–10 scale (clamped).
    /// - `now`: observation time. Calls must arrive in observation order.
    ///
    /// With no prior reading the observation is taken as-is. Otherwise the held
    /// intensity is decayed to `now` and then:
    ///
    /// ```text
    /// same mood:      min(1, decayed + incoming × blend_weight)
    /// different mood: blended = incoming × (1 − inertia) + decayed × inertia
    ///                 blended > decayed → switch to incoming mood at `blended`
    ///                 otherwise         → keep held mood at decayed × penalty
    /// ```
    ///
    /// `inertia` is the *held* label's. The stored intensity is rounded to two
    /// decimals.
    pub fn update(&mut self, mood: EmotionLabel, raw_intensity: f64, now: Millis) -> EmotionReading {
        let incoming = normalize_raw(raw_intensity);

        let next = match self.reading {
            None => EmotionReading {
                label: mood,
                intensity: incoming,
                last_updated: now,
            },
            Some(held) => {
                let decayed = self.decayed(&held, now);
                let (label, intensity) = if held.label == mood {
                    let reinforced = (decayed + incoming * self.config.blend_weight).min(1.0);
                    (mood, reinforced)
                } else {
                    let inertia = self.config.inertia.get(held.label);
                    let blended = incoming * (1.0 - inertia) + decayed * inertia;
                    if blended > decayed {
                        tracing::debug!(
                            from = held.label.as_str(),
                            to = mood.as_str(),
                            intensity = blended,
                            "emotion: mood switched"
                        );
                        (mood, blended)
                    } else {
                        tracing::trace!(
                            held = held.label.as_str(),
                            rejected = mood.as_str(),
                            "emotion: inertia held"
                        );
                        (held.label, decayed * self.config.competing_penalty)
                    }
                };
                EmotionReading {
                    label,
                    intensity: round2(intensity.clamp(0.0, 1.0)),
                    last_updated: now,
                }
            }
        };

        self.reading = Some(next);
        next
    }

    /// The held reading projected to `now`, without mutating anything.
    ///
    /// Returns `None` before the first observation. A projection below the
    /// noise floor yields a fresh `{neutral, 0}` reading stamped `now`.
    pub fn current_state(&self, now: Millis) -> Option<EmotionReading> {
        let held = self.reading?;
        let decayed = self.decayed(&held, now);
        if decayed < self.config.noise_floor {
            return Some(EmotionReading::neutral(now));
        }
        Some(EmotionReading {
            intensity: decayed,
            ..held
        })
    }

    /// Restore a previously exported reading.
    ///
    /// `None` is a no-op. If the reading has decayed below the noise floor by
    /// `now` the model resets to `{neutral, 0}` stamped `now`. Otherwise the
    /// reading is kept with its original timestamp, so a process restart does
    /// not reset the decay timeline.
    pub fn hydrate(&mut self, snapshot: Option<EmotionReading>, now: Millis) {
        let Some(mut reading) = snapshot else {
            return;
        };
        reading.intensity = if reading.intensity.is_nan() {
            0.0
        } else {
            reading.intensity.clamp(0.0, 1.0)
        };

        if self.decayed(&reading, now) < self.config.noise_floor {
            tracing::debug!(label = reading.label.as_str(), "emotion: hydrated below noise floor, reset");
            self.reading = Some(EmotionReading::neutral(now));
        } else {
            self.reading = Some(reading);
        }
    }

    /// Raw stored reading for persistence. No decay applied.
    pub fn export_state(&self) -> Option<EmotionReading> {
        self.reading
    }

    /// `true` iff a reading exists and its *stored* intensity exceeds the noise floor.
    pub fn has_active_emotion(&self) -> bool {
        self.reading
            .is_some_and(|r| r.intensity > self.config.noise_floor)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
