use std::time::Duration;

use crate::input::feed::{PositionSample, SourceKind};

/// How long hook silence must last before polled samples are trusted again.
pub const DEFAULT_HOOK_STALE_AFTER: Duration = Duration::from_millis(250);

/// Keeps at most one capture source authoritative at a time.
///
/// Hook samples always win. Poll samples are accepted only while the hook has been silent for
/// at least `stale_after`, so the polling path acts purely as a fallback. Accepted samples are
/// applied in arrival order (last write wins).
#[derive(Clone, Debug)]
pub struct SourceArbiter {
    stale_after: Duration,
    last_hook: Option<std::time::Instant>,
    active: Option<SourceKind>,
    accepted: u64,
    rejected: u64,
}

impl Default for SourceArbiter {
    fn default() -> Self {
        Self::new(DEFAULT_HOOK_STALE_AFTER)
    }
}

impl SourceArbiter {
    /// Arbiter with a custom hook staleness window.
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            last_hook: None,
            active: None,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Decide whether `sample` should reach the trail.
    pub fn accept(&mut self, sample: &PositionSample) -> bool {
        match sample.source {
            SourceKind::Hook => {
                self.last_hook = Some(match self.last_hook {
                    Some(prev) if prev > sample.at => prev,
                    _ => sample.at,
                });
                self.activate(SourceKind::Hook);
                self.accepted += 1;
                true
            }
            SourceKind::Poll => {
                let hook_live = self
                    .last_hook
                    .is_some_and(|t| sample.at.saturating_duration_since(t) < self.stale_after);
                if hook_live {
                    self.rejected += 1;
                    return false;
                }
                self.activate(SourceKind::Poll);
                self.accepted += 1;
                true
            }
        }
    }

    /// Source that delivered the most recent accepted sample.
    pub fn active(&self) -> Option<SourceKind> {
        self.active
    }

    /// Number of samples let through.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Number of samples dropped in favour of the hook.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    fn activate(&mut self, kind: SourceKind) {
        if self.active != Some(kind) {
            tracing::debug!(?kind, previous = ?self.active, "position source switched");
            self.active = Some(kind);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/arbiter.rs"]
mod tests;
