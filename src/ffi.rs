//! Python FFI bindings via PyO3.
//!
//! Exposes the emotion model, the trust model and the decision pipeline to
//! Python hosts. Labels and modes cross the boundary as lower-case strings.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! import time
//! from affect_core import EmotionModel, TrustModel, run_brain
//!
//! now = int(time.time() * 1000)
//! emotion = EmotionModel()
//! trust = TrustModel(now)
//!
//! emotion.update("anxious", 9.0, now)
//! trust.update_trust(now, emotion="anxious", intensity=9.0, disclosed=True)
//! print(trust.stage())                     # "stranger"
//!
//! decision = run_brain("anxious", 9.0, session_duration=5.0, mode="full", now=now)
//! print(decision["primaryAction"])         # "grounding"
//! ```

#![allow(non_snake_case)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::decision::{
    self, AnimationIntensity, BrainInput, ConfidenceLevel, ContentDensity, Mode, ThemeTone,
};
use crate::emotion::{EmotionModel as RustEmotionModel, EmotionReading};
use crate::label::EmotionLabel;
use crate::thinking::{EnergyLevel, SymbolicTrust};
use crate::trust::{TrustModel as RustTrustModel, TrustSignal, TrustSnapshot};

fn parse_label(s: &str) -> PyResult<EmotionLabel> {
    s.parse()
        .map_err(|_| PyValueError::new_err(format!("unknown emotion label: {s:?}")))
}

fn parse_mode(s: &str) -> PyResult<Mode> {
    s.parse()
        .map_err(|_| PyValueError::new_err(format!("mode must be \"glimpse\" or \"full\", got {s:?}")))
}

fn reading_tuple(r: EmotionReading) -> (&'static str, f64, u64) {
    (r.label.as_str(), r.intensity, r.last_updated)
}

// ── EmotionModel ──────────────────────────────────────────────────────────────

/// Decaying emotional reading with inertia-weighted blending.
///
/// Readings are returned as ``(label, intensity, last_updated_ms)`` tuples.
#[pyclass(name = "EmotionModel")]
pub struct PyEmotionModel {
    inner: RustEmotionModel,
}

#[pymethods]
impl PyEmotionModel {
    /// Create an empty model with default coefficients.
    #[new]
    pub fn new() -> Self {
        Self {
            inner: RustEmotionModel::new(),
        }
    }

    /// Fold an observation into the held reading.
    ///
    /// Args:
    ///     mood:      emotion label, e.g. "sad"
    ///     intensity: raw intensity on the 0–10 scale
    ///     now:       epoch milliseconds
    pub fn update(&mut self, mood: &str, intensity: f64, now: u64) -> PyResult<(&'static str, f64, u64)> {
        let label = parse_label(mood)?;
        Ok(reading_tuple(self.inner.update(label, intensity, now)))
    }

    /// Held reading projected to ``now``, or None before the first observation.
    pub fn current_state(&self, now: u64) -> Option<(&'static str, f64, u64)> {
        self.inner.current_state(now).map(reading_tuple)
    }

    /// Raw stored reading, no decay applied.
    pub fn export_state(&self) -> Option<(&'static str, f64, u64)> {
        self.inner.export_state().map(reading_tuple)
    }

    /// Restore a previously exported ``(label, intensity, last_updated_ms)`` tuple.
    #[pyo3(signature = (reading, now))]
    pub fn hydrate(&mut self, reading: Option<(String, f64, u64)>, now: u64) -> PyResult<()> {
        let reading = match reading {
            Some((label, intensity, last_updated)) => Some(EmotionReading {
                label: parse_label(&label)?,
                intensity,
                last_updated,
            }),
            None => None,
        };
        self.inner.hydrate(reading, now);
        Ok(())
    }

    /// True if the stored intensity is above the noise floor.
    pub fn has_active_emotion(&self) -> bool {
        self.inner.has_active_emotion()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        match self.inner.export_state() {
            Some(r) => format!("EmotionModel(label={:?}, intensity={:.2})", r.label.as_str(), r.intensity),
            None => "EmotionModel(empty)".into(),
        }
    }
}

// ── TrustModel ────────────────────────────────────────────────────────────────

/// Accumulated relational trust with absence decay.
#[pyclass(name = "TrustModel")]
pub struct PyTrustModel {
    inner: RustTrustModel,
}

#[pymethods]
impl PyTrustModel {
    /// Create a model at the cautious starting level.
    ///
    /// Args:
    ///     now: epoch milliseconds of creation
    #[new]
    pub fn new(now: u64) -> Self {
        Self {
            inner: RustTrustModel::new(now),
        }
    }

    /// Apply one interaction and return the new level.
    #[pyo3(signature = (now, emotion=None, intensity=None, disclosed=false))]
    pub fn update_trust(
        &mut self,
        now: u64,
        emotion: Option<&str>,
        intensity: Option<f64>,
        disclosed: bool,
    ) -> PyResult<f64> {
        let emotion = emotion.map(parse_label).transpose()?;
        let signal = TrustSignal {
            emotion,
            intensity,
            disclosed,
        };
        Ok(self.inner.update_trust(signal, now).level)
    }

    /// Restore persisted trust. Missing fields fall back to defaults.
    #[pyo3(signature = (now, level=None, last_interaction=None, interactions=None))]
    pub fn hydrate(
        &mut self,
        now: u64,
        level: Option<f64>,
        last_interaction: Option<u64>,
        interactions: Option<u32>,
    ) {
        self.inner.hydrate(
            Some(TrustSnapshot {
                level,
                last_interaction,
                interactions,
            }),
            now,
        );
    }

    /// ``(level, last_interaction_ms, interactions)`` for persistence.
    pub fn export_state(&self) -> (f64, u64, u32) {
        let s = self.inner.export_state();
        (s.level, s.last_interaction, s.interactions)
    }

    /// Trust level in [0.0, 1.0].
    pub fn level(&self) -> f64 {
        self.inner.trust_level()
    }

    /// One of "stranger", "acquaintance", "friend", "confidant".
    pub fn stage(&self) -> &'static str {
        self.inner.trust_stage().as_str()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "TrustModel(level={:.2}, stage={:?})",
            self.inner.trust_level(),
            self.inner.trust_stage().as_str()
        )
    }
}

// ── run_brain ─────────────────────────────────────────────────────────────────

fn energy_str(e: EnergyLevel) -> &'static str {
    match e {
        EnergyLevel::Low => "low",
        EnergyLevel::Medium => "medium",
        EnergyLevel::High => "high",
    }
}

fn trust_str(t: SymbolicTrust) -> &'static str {
    match t {
        SymbolicTrust::Low => "low",
        SymbolicTrust::Medium => "medium",
        SymbolicTrust::High => "high",
    }
}

fn tone_str(t: ThemeTone) -> &'static str {
    match t {
        ThemeTone::Calm => "calm",
        ThemeTone::Neutral => "neutral",
        ThemeTone::Uplifting => "uplifting",
    }
}

fn animation_str(a: AnimationIntensity) -> &'static str {
    match a {
        AnimationIntensity::Low => "low",
        AnimationIntensity::Medium => "medium",
    }
}

fn density_str(d: ContentDensity) -> &'static str {
    match d {
        ContentDensity::Minimal => "minimal",
        ContentDensity::Normal => "normal",
    }
}

fn confidence_str(c: ConfidenceLevel) -> &'static str {
    match c {
        ConfidenceLevel::Low => "low",
        ConfidenceLevel::Medium => "medium",
        ConfidenceLevel::High => "high",
    }
}

/// Run the decision pipeline and return a flat dict of directives.
///
/// Args:
///     mood:             emotion label
///     intensity:        raw intensity, 0–10
///     session_duration: minutes in session, or None
///     mode:             "full" or "glimpse"
///     now:              epoch milliseconds stamped into ``lastUpdated``
#[pyfunction]
#[pyo3(signature = (mood, intensity, session_duration=None, mode="full", now=0))]
pub fn run_brain<'py>(
    py: Python<'py>,
    mood: &str,
    intensity: f64,
    session_duration: Option<f64>,
    mode: &str,
    now: u64,
) -> PyResult<Bound<'py, PyDict>> {
    let input = BrainInput {
        mood: parse_label(mood)?,
        intensity,
        session_duration,
        mode: parse_mode(mode)?,
    };
    let d = decision::run_brain(&input, now);

    let out = PyDict::new_bound(py);
    out.set_item("interpretedEmotion", d.emotional_snapshot.interpreted_emotion.as_str())?;
    out.set_item("energyLevel", energy_str(d.emotional_snapshot.energy_level))?;
    out.set_item("trustLevel", trust_str(d.emotional_snapshot.trust_level))?;
    out.set_item("themeTone", tone_str(d.ui_decision.theme_tone))?;
    out.set_item("animationIntensity", animation_str(d.ui_decision.animation_intensity))?;
    out.set_item("contentDensity", density_str(d.ui_decision.content_density))?;
    out.set_item("reflectionText", d.dashboard_decision.reflection_text)?;
    out.set_item("primaryAction", d.dashboard_decision.primary_action.as_str())?;
    out.set_item("allowSecondaryActions", d.dashboard_decision.allow_secondary_actions)?;
    out.set_item("confidenceLevel", confidence_str(d.meta.confidence_level))?;
    out.set_item("lastUpdated", d.meta.last_updated)?;
    out.set_item("shouldPersist", d.should_persist())?;
    Ok(out)
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Emotional-state inference and UI adaptation.
#[pymodule]
pub fn affect_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEmotionModel>()?;
    m.add_class::<PyTrustModel>()?;
    m.add_function(wrap_pyfunction!(run_brain, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
