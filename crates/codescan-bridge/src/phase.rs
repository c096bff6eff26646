//! Scan-cycle state machine for the iOS-style bridge

use serde::{Deserialize, Serialize};

/// Phases of one scan cycle on the iOS-style bridge.
///
/// Phase transitions:
/// ```text
/// Idle → Armed → Presenting → Active → Idle
///                    │                   ↑
///                    └───────────────────┘ (code buffered during animation)
///        Any non-Idle phase → Idle (cancel)
/// ```
/// A recognized code that arrives during `Presenting` is buffered, because
/// the native presentation API cannot safely dismiss the view controller
/// mid-animation; it is delivered when the animation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPhase {
    /// No scan cycle running
    #[default]
    Idle,
    /// Handler stored and settings being applied; picker not yet presented
    Armed,
    /// Modal presentation animation running; recognitions are buffered
    Presenting,
    /// Animation done; a recognition dismisses the picker immediately
    Active,
}

impl ScanPhase {
    /// Check if this phase can transition to the target phase
    pub fn can_transition_to(&self, target: ScanPhase) -> bool {
        use ScanPhase::*;
        matches!(
            (self, target),
            // Normal scan cycle
            (Idle, Armed)
                | (Armed, Presenting)
                | (Presenting, Active)
                // Buffered result delivered at animation end
                | (Presenting, Idle)
                // Recognition or cancel terminates the cycle
                | (Active, Idle)
                // Cancel before presentation started
                | (Armed, Idle)
        )
    }

    /// True in every phase except `Idle`. This is the re-entrancy guard:
    /// a new scan is rejected while it holds.
    pub fn in_progress(&self) -> bool {
        !matches!(self, ScanPhase::Idle)
    }

    /// True while the presentation animation is still running, i.e. while
    /// recognized codes must be buffered instead of delivered.
    pub fn buffers_recognitions(&self) -> bool {
        matches!(self, ScanPhase::Presenting)
    }
}

impl std::fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanPhase::Idle => write!(f, "Idle"),
            ScanPhase::Armed => write!(f, "Armed"),
            ScanPhase::Presenting => write!(f, "Presenting"),
            ScanPhase::Active => write!(f, "Active"),
        }
    }
}
