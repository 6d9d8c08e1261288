//! Caller-owned context tying the stateful models to the decision pipeline.
//!
//! [`Brain`] owns one [`EmotionModel`], one [`TrustModel`] and a [`Clock`].
//! There are no module-level singletons: whoever owns the `Brain` owns the
//! session, and `&mut self` on [`Brain::observe`] makes the single-writer
//! discipline explicit. A multithreaded host wraps the whole `Brain` in a
//! mutex; the decay-then-write sequences inside must not interleave.
//!
//! Observations must be fed in the order they happened. Each update decays
//! from the previous update's timestamp.

use crate::clock::{Clock, Millis};
use crate::decision::{run_brain, BrainDecisionState, BrainInput, Mode};
use crate::emotion::{EmotionModel, EmotionReading};
use crate::label::EmotionLabel;
use crate::trust::{TrustModel, TrustReading, TrustSignal, TrustSnapshot, TrustStage};

/// One inbound mood event from the host UI.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoodEvent {
    /// Reported mood.
    pub mood: EmotionLabel,
    /// Raw intensity, 0–10.
    pub intensity: f64,
    /// Session minutes, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub session_duration: Option<f64>,
    /// The user shared something personal.
    #[cfg_attr(feature = "serde", serde(default))]
    pub disclosed: bool,
    /// Execution mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: Mode,
}

impl MoodEvent {
    /// Full-mode event, no disclosure, no session duration.
    pub fn new(mood: EmotionLabel, intensity: f64) -> Self {
        Self {
            mood,
            intensity,
            session_duration: None,
            disclosed: false,
            mode: Mode::Full,
        }
    }

    /// Attach a session duration in minutes.
    pub fn with_session(mut self, minutes: f64) -> Self {
        self.session_duration = Some(minutes);
        self
    }

    /// Mark the event as a disclosure.
    pub fn disclosed(mut self) -> Self {
        self.disclosed = true;
        self
    }

    /// Run as a glimpse.
    pub fn glimpse(mut self) -> Self {
        self.mode = Mode::Glimpse;
        self
    }

    fn input(&self) -> BrainInput {
        BrainInput {
            mood: self.mood,
            intensity: self.intensity,
            session_duration: self.session_duration,
            mode: self.mode,
        }
    }
}

/// Session context: emotion model, trust model and a time source.
#[derive(Debug)]
pub struct Brain<C: Clock> {
    emotion: EmotionModel,
    trust: TrustModel,
    clock: C,
}

impl<C: Clock> Brain<C> {
    /// Fresh context with default models. Trust starts at the cautious level.
    pub fn new(clock: C) -> Self {
        let now = clock.now_ms();
        Self {
            emotion: EmotionModel::new(),
            trust: TrustModel::new(now),
            clock,
        }
    }

    /// Context with pre-built models, e.g. with custom configs.
    pub fn with_models(emotion: EmotionModel, trust: TrustModel, clock: C) -> Self {
        Self { emotion, trust, clock }
    }

    /// Current time from the injected clock.
    pub fn now(&self) -> Millis {
        self.clock.now_ms()
    }

    /// Feed one event through the pipeline.
    ///
    /// A full-mode event updates the emotion model, then the trust model, both
    /// stamped with the same `now`, then maps a decision. A glimpse leaves both
    /// models untouched and only maps a decision.
    pub fn observe(&mut self, event: MoodEvent) -> BrainDecisionState {
        let now = self.clock.now_ms();

        if event.mode == Mode::Full {
            self.emotion.update(event.mood, event.intensity, now);
            self.trust.update_trust(
                TrustSignal {
                    emotion: Some(event.mood),
                    intensity: Some(event.intensity),
                    disclosed: event.disclosed,
                },
                now,
            );
        } else {
            tracing::trace!(mood = event.mood.as_str(), "brain: glimpse, models untouched");
        }

        run_brain(&event.input(), now)
    }

    /// The emotion model.
    pub fn emotion(&self) -> &EmotionModel {
        &self.emotion
    }

    /// The trust model.
    pub fn trust(&self) -> &TrustModel {
        &self.trust
    }

    /// Held emotion projected to now. See [`EmotionModel::current_state`].
    pub fn current_emotion(&self) -> Option<EmotionReading> {
        self.emotion.current_state(self.clock.now_ms())
    }

    /// Persisted trust scalar.
    pub fn trust_level(&self) -> f64 {
        self.trust.trust_level()
    }

    /// Persisted trust bucket.
    pub fn trust_stage(&self) -> TrustStage {
        self.trust.trust_stage()
    }

    /// Raw state of both models for the storage layer.
    pub fn export(&self) -> (Option<EmotionReading>, TrustReading) {
        (self.emotion.export_state(), self.trust.export_state())
    }

    /// Restore both models. `None` leaves the corresponding model untouched.
    pub fn hydrate(&mut self, emotion: Option<EmotionReading>, trust: Option<TrustSnapshot>) {
        let now = self.clock.now_ms();
        self.emotion.hydrate(emotion, now);
        self.trust.hydrate(trust, now);
    }
}
