// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss policy and the cancelable dismiss countdown.

use std::time::Duration;

use crate::config::defaults::DEFAULT_DURATION_SECS;

/// Controls automatic dismissal of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDismiss {
    /// The banner stays until an explicit hide request.
    Never,

    /// The banner dismisses itself after the given display time.
    After(Duration),
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self::After(Duration::from_secs_f32(DEFAULT_DURATION_SECS))
    }
}

impl AutoDismiss {
    /// Maps a configured number of seconds to a policy.
    ///
    /// Zero or negative disables auto-dismiss entirely.
    #[must_use]
    pub fn from_secs(secs: f32) -> Self {
        if secs > 0.0 {
            Self::After(Duration::from_secs_f32(secs))
        } else {
            Self::Never
        }
    }
}

/// Token identifying one armed countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Cancelable, single-shot dismiss countdown.
///
/// The wall-clock wait itself is executed by the embedder as a scheduled
/// task; this type decides which scheduled fire is still live. Arming
/// replaces any previous countdown: the generation bump makes the older
/// task's fire stale, so two live countdowns never coexist.
#[derive(Debug, Default)]
pub struct DismissTimer {
    generation: u64,
    armed: bool,
}

impl DismissTimer {
    /// Creates a disarmed countdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a fresh countdown, invalidating any previously armed one.
    pub fn arm(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        Generation(self.generation)
    }

    /// Cancels the armed countdown.
    ///
    /// Idempotent; safe to call when nothing is armed.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.armed = false;
    }

    /// Consumes a fire for `generation`.
    ///
    /// Returns true only for the currently armed generation. A successful
    /// fire disarms the countdown, so a duplicate delivery returns false.
    pub fn try_fire(&mut self, generation: Generation) -> bool {
        if self.armed && generation.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    /// Whether a countdown is currently armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_two_and_a_half_seconds() {
        assert_eq!(
            AutoDismiss::default(),
            AutoDismiss::After(Duration::from_millis(2500))
        );
    }

    #[test]
    fn zero_or_negative_seconds_disable_auto_dismiss() {
        assert_eq!(AutoDismiss::from_secs(0.0), AutoDismiss::Never);
        assert_eq!(AutoDismiss::from_secs(-1.0), AutoDismiss::Never);
        assert_eq!(
            AutoDismiss::from_secs(4.0),
            AutoDismiss::After(Duration::from_secs(4))
        );
    }

    #[test]
    fn arm_then_fire() {
        let mut timer = DismissTimer::new();
        let generation = timer.arm();
        assert!(timer.is_armed());
        assert!(timer.try_fire(generation));
        assert!(!timer.is_armed());
    }

    #[test]
    fn duplicate_fire_is_rejected() {
        let mut timer = DismissTimer::new();
        let generation = timer.arm();
        assert!(timer.try_fire(generation));
        assert!(!timer.try_fire(generation));
    }

    #[test]
    fn cancel_invalidates_the_pending_fire() {
        let mut timer = DismissTimer::new();
        let generation = timer.arm();
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.try_fire(generation));
    }

    #[test]
    fn cancel_without_an_armed_countdown_is_safe() {
        let mut timer = DismissTimer::new();
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearming_supersedes_the_previous_countdown() {
        let mut timer = DismissTimer::new();
        let first = timer.arm();
        let second = timer.arm();
        assert!(!timer.try_fire(first));
        assert!(timer.is_armed());
        assert!(timer.try_fire(second));
    }
}
