//! # Companion Session Simulation
//!
//! Simulates a user checking in with the companion over ten days: anxious
//! evenings, a sad stretch, some good days, a week away and a return. Shows
//! mood continuity, inertia, trust growth, absence decay across a restart,
//! and the UI directives each check-in produces.
//!
//! Run with: `RUST_LOG=affect_core=debug cargo run --example companion --features std`

use affect_core::decision::BrainDecisionState;
use affect_core::{Brain, EmotionLabel, ManualClock, Millis, MoodEvent};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DAY_MS: Millis = 86_400_000;

// ── Display helpers ───────────────────────────────────────────────────────────

fn bar(v: f64) -> String {
    let filled = ((v * 20.0).round() as usize).min(20);
    let empty = 20 - filled;
    format!("[{}{}] {:.2}", "█".repeat(filled), "░".repeat(empty), v)
}

fn row(label: &str, brain: &Brain<&ManualClock>, d: &BrainDecisionState) {
    let held = brain
        .current_emotion()
        .map_or_else(|| "—".to_string(), |r| format!("{:<8} {}", r.label.as_str(), bar(r.intensity)));
    println!(
        "  {:<28} held {} | trust {} {:<12} | {:?}/{:?} → {:<9} conf {:?}",
        label,
        held,
        bar(brain.trust_level()),
        brain.trust_stage().as_str(),
        d.ui_decision.theme_tone,
        d.ui_decision.content_density,
        d.dashboard_decision.primary_action.as_str(),
        d.meta.confidence_level,
    );
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already installed");
    }

    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║  Companion session simulation — 10 check-in days + a week away      ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝\n");

    let start: Millis = 1_700_000_000_000;
    let clock = ManualClock::new(start);
    let mut brain = Brain::new(&clock);

    // ── Days 1–3: anxious evenings ────────────────────────────────────────────
    println!("▶  DAYS 1–3 — anxious evenings, a happy flicker that does not stick\n");
    for day in 0..3u64 {
        clock.set(start + day * DAY_MS);
        let d = brain.observe(MoodEvent::new(EmotionLabel::Anxious, 8.0).with_session(6.0));
        row(&format!("day {} anxious 8", day + 1), &brain, &d);

        clock.advance_minutes(3.0);
        let d = brain.observe(MoodEvent::new(EmotionLabel::Happy, 4.0).with_session(9.0));
        row("      happy 4 (inertia)", &brain, &d);

        clock.advance_minutes(15.0);
        let d = brain.observe(MoodEvent::new(EmotionLabel::Anxious, 6.0).with_session(24.0).disclosed());
        row("      anxious 6, disclosed", &brain, &d);
    }
    println!();

    // ── Days 4–6: a sad stretch ───────────────────────────────────────────────
    println!("▶  DAYS 4–6 — sad, low energy: gentle journal prompts\n");
    for day in 3..6u64 {
        clock.set(start + day * DAY_MS);
        let d = brain.observe(MoodEvent::new(EmotionLabel::Sad, 7.0).with_session(35.0).disclosed());
        row(&format!("day {} sad 7, long session", day + 1), &brain, &d);
    }
    println!();

    // ── Days 7–10: good days ──────────────────────────────────────────────────
    println!("▶  DAYS 7–10 — happy check-ins: uplifting theme\n");
    for day in 6..10u64 {
        clock.set(start + day * DAY_MS);
        let d = brain.observe(MoodEvent::new(EmotionLabel::Happy, 9.0).with_session(8.0));
        row(&format!("day {} happy 9", day + 1), &brain, &d);
    }
    println!();

    // ── A glimpse from a friend's phone ───────────────────────────────────────
    println!("▶  GLIMPSE — one-off look: capped confidence, nothing stored\n");
    let d = brain.observe(MoodEvent::new(EmotionLabel::Stressed, 10.0).with_session(40.0).glimpse());
    row("glimpse stressed 10", &brain, &d);
    println!("  persist? {}\n", d.should_persist());

    // ── A week away, then a restart ───────────────────────────────────────────
    println!("▶  RESTART — a week away, state restored from storage\n");
    let (emotion, trust) = brain.export();
    let level_before = brain.trust_level();

    clock.set(start + 17 * DAY_MS);
    let mut restored = Brain::new(&clock);
    restored.hydrate(emotion, Some(trust.into()));
    println!(
        "  trust before {:.3} → after restore {:.3} ({})",
        level_before,
        restored.trust_level(),
        restored.trust_stage().as_str()
    );

    let d = restored.observe(MoodEvent::new(EmotionLabel::Confused, 5.0));
    row("day 18 confused 5", &restored, &d);
    println!("\n  reflection: \"{}\"", d.dashboard_decision.reflection_text);
}
