//! Base combat stats assigned at world setup.

/// Starting values for one agent.
///
/// `speed` and `health` are only the *initial* values; the live values sit on
/// [`Agent`][crate::Agent] and change during play.  The rest are constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStats {
    /// Initiative.  Higher acts sooner.  Must be ≥ 1.
    pub speed: i32,
    /// Starting hit points.  Must be > 0.
    pub health: i32,
    /// Stored but not consulted by movement: agents always step one cell.
    pub move_range: u32,
    /// Manhattan reach of an attack.
    pub attack_range: u32,
    /// Fixed damage per hit.  Must be ≥ 0.
    pub damage: i32,
}

impl AgentStats {
    /// Return a description of the first invalid field, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.speed < 1 {
            return Err(format!("speed must be >= 1, got {}", self.speed));
        }
        if self.health <= 0 {
            return Err(format!("health must be > 0, got {}", self.health));
        }
        if self.damage < 0 {
            return Err(format!("damage must be >= 0, got {}", self.damage));
        }
        Ok(())
    }
}

impl Default for AgentStats {
    fn default() -> Self {
        Self {
            speed:        10,
            health:       100,
            move_range:   3,
            attack_range: 1,
            damage:       20,
        }
    }
}
