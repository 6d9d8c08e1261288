//! Persistence envelope integration tests.
//!
//! Run with: `cargo test --features serde`
//!
//! Verifies that a live `Brain` can be captured, serialised to the host's JSON
//! shape, handed back (possibly partial) and restored with absence decay.

#![cfg(feature = "serde")]

use affect_core::snapshot::{BrainSnapshot, SNAPSHOT_VERSION};
use affect_core::{run_brain, Brain, BrainInput, EmotionLabel, ManualClock, Millis, Mode, MoodEvent};

const T0: Millis = 1_700_000_000_000;
const MINUTE: Millis = 60_000;
const DAY: Millis = 1_440 * MINUTE;

fn session(clock: &ManualClock) -> Brain<&ManualClock> {
    let mut brain = Brain::new(clock);
    brain.observe(MoodEvent::new(EmotionLabel::Anxious, 8.0).disclosed());
    clock.advance_minutes(2.0);
    brain.observe(MoodEvent::new(EmotionLabel::Anxious, 6.0));
    brain
}

#[test]
fn test_capture_uses_host_field_names() {
    let clock = ManualClock::new(T0);
    let brain = session(&clock);
    let json = serde_json::to_value(BrainSnapshot::capture(&brain)).unwrap();

    assert_eq!(json["version"], SNAPSHOT_VERSION);
    assert_eq!(json["savedAt"], T0 + 2 * MINUTE);
    assert_eq!(json["emotion"]["label"], "anxious");
    assert_eq!(json["emotion"]["lastUpdated"], T0 + 2 * MINUTE);
    assert_eq!(json["trust"]["interactions"], 2);
    assert!(json["trust"]["lastInteraction"].is_u64());
}

#[test]
fn test_restore_within_minutes_keeps_timeline() {
    let clock = ManualClock::new(T0);
    let brain = session(&clock);
    let json = serde_json::to_string(&BrainSnapshot::capture(&brain)).unwrap();

    clock.advance_minutes(3.0);
    let mut fresh = Brain::new(&clock);
    let restored: BrainSnapshot = serde_json::from_str(&json).unwrap();
    restored.restore_into(&mut fresh);

    let (before_emotion, before_trust) = brain.export();
    let (after_emotion, after_trust) = fresh.export();
    let (before_emotion, after_emotion) = (before_emotion.unwrap(), after_emotion.unwrap());

    assert_eq!(after_emotion.label, before_emotion.label);
    assert_eq!(after_emotion.last_updated, before_emotion.last_updated);
    assert!((after_emotion.intensity - before_emotion.intensity).abs() < 1e-12);
    assert_eq!(after_trust.last_interaction, before_trust.last_interaction);
    assert_eq!(after_trust.interactions, before_trust.interactions);
    assert!((after_trust.level - before_trust.level).abs() < 1e-12);
}

#[test]
fn test_restore_after_days_decays() {
    let clock = ManualClock::new(T0);
    let brain = session(&clock);
    let snapshot = BrainSnapshot::capture(&brain);
    let level_before = brain.trust_level();

    clock.advance_ms(3 * DAY);
    let mut fresh = Brain::new(&clock);
    snapshot.restore_into(&mut fresh);

    // Emotion long since faded below the noise floor.
    let emotion = fresh.emotion().export_state().unwrap();
    assert_eq!(emotion.label, EmotionLabel::Neutral);
    assert_eq!(emotion.intensity, 0.0);
    // Trust scaled by 1 − 3 × 0.05.
    assert!((fresh.trust_level() - level_before * 0.85).abs() < 1e-3);
}

#[test]
fn test_partial_snapshot_falls_back_to_defaults() {
    let clock = ManualClock::new(T0);
    let restored: BrainSnapshot =
        serde_json::from_str(r#"{ "emotion": null, "trust": { "level": 0.6 } }"#).unwrap();
    assert_eq!(restored.version, SNAPSHOT_VERSION);

    let mut brain = Brain::new(&clock);
    restored.restore_into(&mut brain);
    assert!(brain.emotion().export_state().is_none());
    assert_eq!(brain.trust_level(), 0.6);
    assert_eq!(brain.trust().export_state().last_interaction, T0);
}

#[test]
fn test_decision_serialises_for_the_ui() {
    let d = run_brain(
        &BrainInput::new(EmotionLabel::Anxious, 9.0).with_session(5.0).with_mode(Mode::Full),
        T0,
    );
    let json = serde_json::to_value(d).unwrap();
    assert_eq!(json["emotionalSnapshot"]["energyLevel"], "high");
    assert_eq!(json["uiDecision"]["themeTone"], "calm");
    assert_eq!(json["dashboardDecision"]["primaryAction"], "grounding");
    assert_eq!(json["dashboardDecision"]["allowSecondaryActions"], false);
    assert_eq!(json["recommendationDecision"]["type"], "grounding");
    assert_eq!(json["meta"]["confidenceLevel"], "high");
    assert!(json.get("mode").is_none());
}
