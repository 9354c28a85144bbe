//! A single combatant.

use chronos_core::{AgentId, Position, Team};

use crate::AgentStats;

/// One agent's identity, constants, and mutable combat state.
///
/// Speed and health are only changed through the clamping setters, so
/// `speed >= 1` and `health >= 0` always hold.  Liveness is derived from
/// health; `active` tracks whether the agent currently takes part in combat
/// (i.e. is present in the occupancy index and in queue rebuilds).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id:       AgentId,
    name:     String,
    team:     Team,
    stats:    AgentStats,
    speed:    i32,
    health:   i32,
    position: Position,
    active:   bool,
}

impl Agent {
    /// Create an agent at full base stats.  The roster assigns `id`.
    pub(crate) fn new(
        id:       AgentId,
        name:     String,
        team:     Team,
        stats:    AgentStats,
        position: Position,
    ) -> Self {
        Self {
            id,
            name,
            team,
            stats,
            speed: stats.speed.max(1),
            health: stats.health.max(0),
            position,
            active: stats.health > 0,
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// `false` after death until a restore revives the agent.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn move_range(&self) -> u32 {
        self.stats.move_range
    }

    #[inline]
    pub fn attack_range(&self) -> u32 {
        self.stats.attack_range
    }

    #[inline]
    pub fn damage(&self) -> i32 {
        self.stats.damage
    }

    pub fn base_stats(&self) -> &AgentStats {
        &self.stats
    }

    /// `true` if `other` is a valid attack target for this agent.
    pub fn is_hostile_to(&self, other: &Agent) -> bool {
        other.id != self.id && other.team != self.team
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Stores `max(1, value)`.
    #[inline]
    pub fn set_speed(&mut self, value: i32) {
        self.speed = value.max(1);
    }

    /// Stores `max(0, value)`.
    #[inline]
    pub fn set_health(&mut self, value: i32) {
        self.health = value.max(0);
    }

    /// Overwrite the recorded cell.
    ///
    /// This does not touch the occupancy index.  During play use
    /// `GridIndex::try_move`; raw writes are for snapshot restore, which
    /// rebuilds the index afterwards.
    #[inline]
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Remove the agent from combat (on death).
    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Bring the agent back into combat (on restore).
    #[inline]
    pub fn activate(&mut self) {
        self.active = true;
    }
}
