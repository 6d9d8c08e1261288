//! End-to-end behaviour of the inference pipeline.
//!
//! Drives the public API only: the thinking loop, the decision mapper and a
//! `Brain` session on a hand-driven clock.

use affect_core::decision::{AnimationIntensity, ContentDensity};
use affect_core::{
    run_brain, run_thinking_loop, Brain, BrainInput, BrainObservation, ConfidenceLevel,
    EmotionLabel, EmotionModel, EnergyLevel, Focus, ManualClock, Millis, Mode, MoodEvent,
    PrimaryAction, SymbolicTrust, ThemeTone, TrustModel, TrustSnapshot, TrustStage,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

const T0: Millis = 1_700_000_000_000;
const MINUTE: Millis = 60_000;
const DAY: Millis = 1_440 * MINUTE;

fn all_inputs() -> impl Iterator<Item = BrainInput> {
    EmotionLabel::ALL.into_iter().flat_map(|mood| {
        (0..=10).flat_map(move |i| {
            [None, Some(5.0), Some(15.0), Some(45.0)]
                .into_iter()
                .map(move |s| BrainInput {
                    mood,
                    intensity: i as f64,
                    session_duration: s,
                    mode: Mode::Full,
                })
        })
    })
}

// ─── thinking loop scenarios ─────────────────────────────────────────────────

#[test]
fn test_anxious_intense_short_session() {
    let s = run_thinking_loop(&BrainObservation::new(EmotionLabel::Anxious, 9.0).with_session(5.0));
    assert_eq!(s.energy_level, EnergyLevel::High);
    assert_eq!(s.trust_level, SymbolicTrust::High);
    assert_eq!(s.focus, Focus::Stabilization);
}

#[test]
fn test_thinking_loop_is_referentially_transparent() {
    for input in all_inputs() {
        let obs = input.observation();
        assert_eq!(run_thinking_loop(&obs), run_thinking_loop(&obs), "{obs:?}");
    }
}

// ─── decision mapper scenarios ───────────────────────────────────────────────

#[test]
fn test_anxious_full_grounds_without_secondary_actions() {
    let d = run_brain(
        &BrainInput::new(EmotionLabel::Anxious, 9.0).with_session(5.0),
        T0,
    );
    assert_eq!(d.dashboard_decision.primary_action, PrimaryAction::Grounding);
    assert!(!d.dashboard_decision.allow_secondary_actions);
    assert_eq!(d.ui_decision.theme_tone, ThemeTone::Calm);
}

#[test]
fn test_happy_full_enhances() {
    let d = run_brain(&BrainInput::new(EmotionLabel::Happy, 5.0), T0);
    assert_eq!(d.ui_decision.theme_tone, ThemeTone::Uplifting);
    assert_eq!(d.dashboard_decision.primary_action, PrimaryAction::Journal);
}

#[test]
fn test_glimpse_never_claims_high() {
    for input in all_inputs() {
        let glimpse = run_brain(&input.with_mode(Mode::Glimpse), T0);
        assert_ne!(glimpse.meta.confidence_level, ConfidenceLevel::High, "{input:?}");
        assert_ne!(glimpse.emotional_snapshot.trust_level, SymbolicTrust::High, "{input:?}");

        let full = run_brain(&input, T0);
        if full.emotional_snapshot.trust_level == SymbolicTrust::High {
            assert_eq!(glimpse.emotional_snapshot.trust_level, SymbolicTrust::Medium);
        } else {
            assert_eq!(
                glimpse.emotional_snapshot.trust_level,
                full.emotional_snapshot.trust_level
            );
        }
        // Mode only touches trust and confidence.
        assert_eq!(glimpse.ui_decision, full.ui_decision);
        assert_eq!(glimpse.dashboard_decision, full.dashboard_decision);
    }
}

#[test]
fn test_happy_glimpse_confidence_capped() {
    let d = run_brain(
        &BrainInput::new(EmotionLabel::Happy, 9.0).with_mode(Mode::Glimpse),
        T0,
    );
    assert_ne!(d.meta.confidence_level, ConfidenceLevel::High);
}

#[test]
fn test_ui_contract_consistency() {
    for input in all_inputs() {
        let d = run_brain(&input, T0);
        match d.ui_decision.theme_tone {
            ThemeTone::Calm => {
                assert_eq!(d.ui_decision.content_density, ContentDensity::Minimal);
                assert_eq!(d.ui_decision.animation_intensity, AnimationIntensity::Low);
            }
            ThemeTone::Uplifting => {
                assert_eq!(d.ui_decision.animation_intensity, AnimationIntensity::Medium);
                assert_eq!(d.dashboard_decision.primary_action, PrimaryAction::Journal);
            }
            ThemeTone::Neutral => {
                assert_eq!(d.dashboard_decision.primary_action, PrimaryAction::None);
            }
        }
        // Only grounding ever suppresses secondary actions.
        assert_eq!(
            d.dashboard_decision.allow_secondary_actions,
            d.dashboard_decision.primary_action != PrimaryAction::Grounding
        );
    }
}

// ─── stateful models ─────────────────────────────────────────────────────────

#[test]
fn test_intensity_always_clamped() {
    let mut m = EmotionModel::new();
    let mut t = T0;
    for raw in [-50.0, 0.0, 3.0, 11.0, 1e9, -1e9, 7.5] {
        for mood in EmotionLabel::ALL {
            let r = m.update(mood, raw, t);
            assert!((0.0..=1.0).contains(&r.intensity), "{r:?}");
            t += 17_000;
        }
    }
}

#[test]
fn test_decay_is_monotone_until_floor() {
    let mut m = EmotionModel::new();
    m.update(EmotionLabel::Angry, 10.0, T0);

    let mut prev = f64::INFINITY;
    let mut snapped = false;
    for step in 0..120 {
        let now = T0 + step * 15_000;
        let r = m.current_state(now).unwrap();
        assert!(r.intensity <= prev, "step {step}: {} > {prev}", r.intensity);
        if r.label == EmotionLabel::Neutral {
            assert_eq!(r.intensity, 0.0);
            assert_eq!(r.last_updated, now);
            snapped = true;
        } else {
            assert!(!snapped, "reading came back after snapping to neutral");
            assert!(r.intensity >= 0.15);
        }
        prev = r.intensity;
    }
    assert!(snapped);
}

#[test]
fn test_same_mood_never_decreases_immediately() {
    for mood in EmotionLabel::ALL {
        for first in 0..=10 {
            for second in 0..=10 {
                let mut m = EmotionModel::new();
                let a = m.update(mood, first as f64, T0);
                let b = m.update(mood, second as f64, T0);
                assert!(b.intensity >= a.intensity - 1e-9, "{mood} {first} {second}");
            }
        }
    }
}

#[test]
fn test_anxiety_resists_weak_happiness() {
    let mut m = EmotionModel::new();
    m.update(EmotionLabel::Anxious, 9.0, T0);
    let r = m.update(EmotionLabel::Happy, 3.0, T0);
    assert_eq!(r.label, EmotionLabel::Anxious);
    assert!((r.intensity - 0.855).abs() < 0.01, "intensity={}", r.intensity);
}

#[test]
fn test_trust_decays_across_restart() {
    let now = T0 + 2 * DAY;
    let mut t = TrustModel::new(now);
    t.hydrate(
        Some(TrustSnapshot {
            level: Some(0.5),
            last_interaction: Some(T0),
            interactions: Some(5),
        }),
        now,
    );
    assert!(t.trust_level() < 0.5);
}

// ─── session ─────────────────────────────────────────────────────────────────

#[test]
fn test_week_of_sessions_builds_trust() {
    let clock = ManualClock::new(T0);
    let mut brain = Brain::new(&clock);

    for day in 0..7 {
        for (mood, intensity) in [(EmotionLabel::Anxious, 8.0), (EmotionLabel::Sad, 6.0)] {
            brain.observe(MoodEvent::new(mood, intensity).with_session(12.0).disclosed());
            clock.advance_minutes(20.0);
        }
        clock.set(T0 + (day + 1) * DAY);
    }

    assert_eq!(brain.trust().export_state().interactions, 14);
    assert!(brain.trust_level() > 0.5, "level={}", brain.trust_level());
    assert!(brain.trust_stage() >= TrustStage::Friend);
}

#[test]
fn test_glimpse_events_do_not_build_trust() {
    let clock = ManualClock::new(T0);
    let mut brain = Brain::new(&clock);
    for _ in 0..20 {
        let d = brain.observe(MoodEvent::new(EmotionLabel::Stressed, 9.0).disclosed().glimpse());
        assert!(!d.should_persist());
        clock.advance_minutes(1.0);
    }
    assert_eq!(brain.trust_stage(), TrustStage::Stranger);
    assert!(brain.current_emotion().is_none());
}
