//! Damage and death.

use tracing::debug;

use chronos_agent::AgentRoster;
use chronos_core::{AgentId, Position};
use chronos_grid::GridIndex;

/// Result of one successful hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker:         AgentId,
    pub target:           AgentId,
    /// Health actually removed (the attacker's damage, capped at what the
    /// target had left).
    pub damage:           i32,
    pub remaining_health: i32,
    pub killed:           bool,
    /// Where the target stood when hit.
    pub target_position:  Position,
}

/// Apply `attacker`'s fixed damage to `target`.
///
/// Returns `None` without touching anything if either agent is missing, dead,
/// or they are the same agent.  A target whose health reaches zero is removed
/// from the grid and deactivated; it stays in the roster so a restore can
/// bring it back.
pub fn attack(
    roster:   &mut AgentRoster,
    grid:     &mut GridIndex,
    attacker: AgentId,
    target:   AgentId,
) -> Option<AttackOutcome> {
    let (striker, victim) = roster.pair_mut(attacker, target)?;
    if !striker.is_alive() || !victim.is_alive() {
        return None;
    }

    let before = victim.health();
    victim.set_health(before - striker.damage());
    let remaining = victim.health();
    let killed = !victim.is_alive();
    let target_position = victim.position();

    if killed {
        grid.unregister(victim);
        victim.deactivate();
    }

    debug!(
        attacker = %attacker,
        target = %target,
        damage = before - remaining,
        remaining,
        killed,
        "attack resolved"
    );

    Some(AttackOutcome {
        attacker,
        target,
        damage: before - remaining,
        remaining_health: remaining,
        killed,
        target_position,
    })
}
