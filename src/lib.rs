//! # affect-core
//!
//! Emotional-state inference and UI adaptation for a wellness companion.
//!
//! The host UI reports a mood, an intensity and a little session context. This
//! crate keeps a decaying picture of how the user has been feeling, tracks how
//! much relational trust has been earned, and turns each report into a small
//! set of directives the UI renders: theme tone, motion, content density and
//! one recommended action.
//!
//! ---
//!
//! ## Two kinds of state, one pure pipeline
//!
//! **Emotional continuity** — a new report does not simply overwrite the last.
//! The held reading decays linearly with wall-clock minutes, a repeated mood
//! reinforces it, and a different mood only takes over if it beats the held
//! one after weighting by that mood's inertia. Anxiety is sticky; happiness
//! gives way easily.
//!
//! **Earned trust** — a slowly growing scalar, nudged up by every interaction,
//! more by disclosure and by sharing intense distress, and eroded by absence.
//!
//! **The thinking loop** — a stateless Observe → Interpret → Decide → Learn
//! transform from one report to an energy level, a per-call symbolic trust and
//! a focus strategy. The decision mapper then applies execution-mode limits
//! and maps focus onto UI contracts.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! MoodEvent ─┬→ EmotionModel (decay + inertia blend)     ← stateful, time-aware
//!            ├→ TrustModel   (growth + absence decay)    ← stateful, time-aware
//!            └→ ThinkingLoop → mode constraints → DecisionMapper → BrainDecisionState
//!                 (pure)          (glimpse caps)       (pure)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`label`] | [`EmotionLabel`] | The seven mood categories and their arousal classes |
//! | [`emotion`] | [`EmotionModel`], [`EmotionReading`], [`EmotionConfig`] | Decaying reading with inertia-weighted blending |
//! | [`trust`] | [`TrustModel`], [`TrustStage`], [`TrustConfig`] | Accumulating trust scalar with absence decay |
//! | [`thinking`] | [`BrainObservation`], [`BrainState`], [`Focus`] | Observe → Interpret → Decide → Learn |
//! | [`decision`] | [`BrainInput`], [`BrainDecisionState`], [`Mode`] | Mode constraints and UI / dashboard mapping |
//! | [`brain`] | [`Brain`], [`MoodEvent`] | Caller-owned session context wiring it all together |
//! | [`clock`] | [`Clock`], [`ManualClock`] | Injectable time source |
//! | [`error`] | [`ConfigError`] | Config validation failures |
//! | [`snapshot`] | `BrainSnapshot` | Serialisable persistence envelope (requires `serde` feature) |
//!
//! ## Quick start
//!
//! ```rust
//! use affect_core::{Brain, EmotionLabel, ManualClock, MoodEvent, PrimaryAction};
//!
//! let clock = ManualClock::new(1_700_000_000_000);
//! let mut brain = Brain::new(&clock);
//!
//! let decision = brain.observe(MoodEvent::new(EmotionLabel::Anxious, 9.0).with_session(5.0));
//! assert_eq!(decision.dashboard_decision.primary_action, PrimaryAction::Grounding);
//!
//! clock.advance_minutes(10.0);
//! let now = brain.current_emotion().unwrap();
//! assert_eq!(now.label, EmotionLabel::Anxious);
//! assert!(now.intensity < 0.9);
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default with no heap required beyond the
//! inertia table. Enable `std` for [`clock::SystemClock`], `serde` for
//! serialisation and the [`snapshot`] module, `python-ffi` for PyO3 bindings.
//!
//! ## License
//!
//! Business Source License 1.1. Free for evaluation and non-production use.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod label;
pub mod clock;
pub mod error;
pub mod emotion;
pub mod trust;
pub mod thinking;
pub mod decision;
pub mod brain;
#[cfg(feature = "serde")]
pub mod snapshot;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use brain::{Brain, MoodEvent};
pub use clock::{Clock, FnClock, ManualClock, Millis};
pub use decision::{
    run_brain, BrainDecisionState, BrainInput, ConfidenceLevel, Mode, PrimaryAction, ThemeTone,
};
pub use emotion::{EmotionConfig, EmotionModel, EmotionReading, InertiaTable};
pub use error::ConfigError;
pub use label::EmotionLabel;
pub use thinking::{run_thinking_loop, BrainObservation, BrainState, EnergyLevel, Focus, SymbolicTrust};
pub use trust::{TrustConfig, TrustModel, TrustReading, TrustSignal, TrustSnapshot, TrustStage};
