//! Persistence envelope for a [`Brain`] session.
//!
//! The storage layer is outside this crate. It receives a [`BrainSnapshot`],
//! serialises it however it likes (JSON in the browser host), and hands the
//! same shape back later. Field names follow the host's camelCase:
//!
//! ```json
//! {
//!   "version": 1,
//!   "savedAt": 1700000000000,
//!   "emotion": { "label": "anxious", "intensity": 0.8, "lastUpdated": 1700000000000 },
//!   "trust":   { "level": 0.23, "lastInteraction": 1700000000000, "interactions": 4 }
//! }
//! ```
//!
//! Every trust field may be missing on the way back in, and `emotion` may be
//! `null`; restoring treats those as "keep the default".
//!
//! # Example
//!
//! ```rust,ignore
//! use affect_core::snapshot::BrainSnapshot;
//!
//! let snapshot = BrainSnapshot::capture(&brain);
//! let json = serde_json::to_string(&snapshot).unwrap();
//! let restored: BrainSnapshot = serde_json::from_str(&json).unwrap();
//! restored.restore_into(&mut fresh_brain);
//! ```

use crate::brain::Brain;
use crate::clock::{Clock, Millis};
use crate::emotion::EmotionReading;
use crate::trust::TrustSnapshot;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u16 = 1;

/// Serialisable state of both stateful models.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrainSnapshot {
    /// Format version. Always [`SNAPSHOT_VERSION`] for new snapshots.
    #[serde(default = "current_version")]
    pub version: u16,
    /// When the snapshot was taken.
    #[serde(default)]
    pub saved_at: Millis,
    /// Raw emotion reading, no decay applied. `None` before the first observation.
    #[serde(default)]
    pub emotion: Option<EmotionReading>,
    /// Trust state.
    #[serde(default)]
    pub trust: TrustSnapshot,
}

fn current_version() -> u16 {
    SNAPSHOT_VERSION
}

impl BrainSnapshot {
    /// Capture the raw state of `brain`.
    pub fn capture<C: Clock>(brain: &Brain<C>) -> Self {
        let (emotion, trust) = brain.export();
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: brain.now(),
            emotion,
            trust: trust.into(),
        }
    }

    /// Restore into `brain`, applying absence decay as of the brain's clock.
    pub fn restore_into<C: Clock>(&self, brain: &mut Brain<C>) {
        if self.version != SNAPSHOT_VERSION {
            tracing::warn!(version = self.version, "snapshot: unexpected version, restoring anyway");
        }
        brain.hydrate(self.emotion, Some(self.trust));
    }
}
