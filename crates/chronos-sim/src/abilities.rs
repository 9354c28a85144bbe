//! Player-facing time abilities built on the scheduler's triggers.

use tracing::info;

use chronos_core::{AgentId, Team};

use crate::TurnScheduler;

/// Strength of the wand's effects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityConfig {
    /// Speed added to every living ally by [`ChronosWand::accelerate`].
    /// Default: 2.
    pub ally_speed_boost: i32,

    /// Speed taken from every living enemy by [`ChronosWand::slow_enemies`].
    /// Default: 2.
    pub enemy_slow_amount: i32,
}

impl Default for AbilityConfig {
    fn default() -> Self {
        Self { ally_speed_boost: 2, enemy_slow_amount: 2 }
    }
}

/// The three abilities a player can trigger between loop steps.
#[derive(Clone, Debug, Default)]
pub struct ChronosWand {
    config: AbilityConfig,
}

impl ChronosWand {
    pub fn new(config: AbilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AbilityConfig {
        &self.config
    }

    /// Speed up every ally, then pull the fastest one to the front of the
    /// queue.  Returns the ally that was promoted, if any.
    pub fn accelerate(&self, scheduler: &mut TurnScheduler) -> Option<AgentId> {
        info!(boost = self.config.ally_speed_boost, "accelerate");
        scheduler.adjust_initiative(Team::Ally, self.config.ally_speed_boost);
        scheduler.grant_immediate_turn(Team::Ally)
    }

    /// Slow every enemy.
    pub fn slow_enemies(&self, scheduler: &mut TurnScheduler) {
        info!(amount = self.config.enemy_slow_amount, "slow enemies");
        scheduler.adjust_initiative(Team::Enemy, -self.config.enemy_slow_amount);
    }

    /// Undo the latest turn once it finishes.  Returns `false` if there is
    /// nothing to undo yet.
    pub fn rewind(&self, scheduler: &mut TurnScheduler) -> bool {
        scheduler.request_rewind()
    }
}
