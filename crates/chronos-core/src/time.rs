//! Turn counting and pacing.
//!
//! # Design
//!
//! The scheduler never sleeps on its own.  At each suspension point it asks a
//! [`Pacer`] to "advance time by `d`".  A game client hands in a pacer that
//! really waits; tests hand in a [`VirtualClock`] that only records the
//! request.  Pacing is never a correctness boundary: the world state after a
//! pause is exactly what it was before it.

use std::fmt;
use std::time::Duration;

// ── TurnNumber ────────────────────────────────────────────────────────────────

/// Count of agent turns started since the scheduler was built.
///
/// Turns discarded because the dequeued agent was dead are not counted.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnNumber(pub u64);

impl TurnNumber {
    pub const ZERO: TurnNumber = TurnNumber(0);

    /// The following turn.
    #[inline]
    pub fn next(self) -> TurnNumber {
        TurnNumber(self.0 + 1)
    }
}

impl fmt::Display for TurnNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {}", self.0)
    }
}

// ── PacingConfig ──────────────────────────────────────────────────────────────

/// Durations of the loop's suspension points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacingConfig {
    /// Pause before the very first turn.  Default: 0.2 s.
    pub start_delay: Duration,

    /// Per-turn action delay.  The agent pauses for half of it before acting
    /// (PreDelay) and for all of it after (PostDelay).  Default: 0.4 s.
    pub action_delay: Duration,

    /// Pause between the end of one turn and the start of the next.
    /// Default: 0.4 s.
    pub turn_delay: Duration,
}

impl PacingConfig {
    /// A config with every delay set to zero.  Useful for headless runs.
    pub fn instant() -> Self {
        Self {
            start_delay:  Duration::ZERO,
            action_delay: Duration::ZERO,
            turn_delay:   Duration::ZERO,
        }
    }

    #[inline]
    pub fn pre_action_delay(&self) -> Duration {
        self.action_delay / 2
    }

    #[inline]
    pub fn post_action_delay(&self) -> Duration {
        self.action_delay
    }

    /// Multiply every delay by `factor` (e.g. 0.25 for a fast-forward demo).
    ///
    /// A zero, negative or NaN factor gives zero delays; a product too large
    /// for a `Duration` saturates at `Duration::MAX`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            start_delay:  scale_delay(self.start_delay, factor),
            action_delay: scale_delay(self.action_delay, factor),
            turn_delay:   scale_delay(self.turn_delay, factor),
        }
    }
}

fn scale_delay(delay: Duration, factor: f32) -> Duration {
    if factor.is_nan() || factor <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(delay.as_secs_f64() * f64::from(factor)).unwrap_or(Duration::MAX)
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            start_delay:  Duration::from_millis(200),
            action_delay: Duration::from_millis(400),
            turn_delay:   Duration::from_millis(400),
        }
    }
}

// ── Pacer ─────────────────────────────────────────────────────────────────────

/// The "advance time by duration" primitive the scheduler suspends on.
pub trait Pacer {
    fn advance(&mut self, by: Duration);
}

/// Returns immediately.
pub struct NoopPacer;

impl Pacer for NoopPacer {
    #[inline]
    fn advance(&mut self, _by: Duration) {}
}

/// Blocks the calling thread for the requested duration.
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn advance(&mut self, by: Duration) {
        if !by.is_zero() {
            std::thread::sleep(by);
        }
    }
}

/// Simulated clock: accumulates requested pauses without waiting.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    elapsed: Duration,
    pauses:  Vec<Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time that has passed.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Every pause requested so far, in order.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Number of suspension points hit so far.
    pub fn pause_count(&self) -> usize {
        self.pauses.len()
    }
}

impl Pacer for VirtualClock {
    fn advance(&mut self, by: Duration) {
        self.elapsed += by;
        self.pauses.push(by);
    }
}
