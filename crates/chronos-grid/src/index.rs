//! Cell → agent occupancy map and coordinate conversion.
//!
//! # Coordinates
//!
//! The grid is centred on the scene origin.  Cell `(x, y)` maps to
//!
//! ```text
//! world.x = (x - (width  - 1) / 2) * tile_size
//! world.z = (y - (height - 1) / 2) * tile_size
//! ```
//!
//! and the inverse rounds half-to-even, so every cell centre round-trips
//! exactly and points between centres snap to the nearest cell.

use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use chronos_agent::{Agent, AgentRoster};
use chronos_core::{AgentId, Position, WorldPoint};

use crate::{GridError, GridResult};

// ── GridConfig ────────────────────────────────────────────────────────────────

/// Grid dimensions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Cells along x.  Default: 10.
    pub width: u32,
    /// Cells along y.  Default: 10.
    pub height: u32,
    /// World-space edge length of one cell.  Default: 1.0.
    pub tile_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width: 10, height: 10, tile_size: 1.0 }
    }
}

// ── GridIndex ─────────────────────────────────────────────────────────────────

/// Exclusive mapping from grid cell to the agent standing on it.
///
/// Holds `AgentId`s, not agents: the roster owns agent state and the index
/// only records who is where.  Mutating calls take the agent itself so the
/// agent's recorded position and the index entry change together.
#[derive(Clone, Debug)]
pub struct GridIndex {
    width:     i32,
    height:    i32,
    tile_size: f32,
    cells:     FxHashMap<Position, AgentId>,
}

impl GridIndex {
    /// Create an empty index.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimensions`] for a zero dimension, a dimension that
    /// does not fit `i32`, or a non-positive / non-finite tile size.
    pub fn new(config: &GridConfig) -> GridResult<Self> {
        let invalid = || GridError::InvalidDimensions {
            width:     config.width,
            height:    config.height,
            tile_size: config.tile_size,
        };
        if config.width == 0 || config.height == 0 {
            return Err(invalid());
        }
        if !(config.tile_size.is_finite() && config.tile_size > 0.0) {
            return Err(invalid());
        }
        let width = i32::try_from(config.width).map_err(|_| invalid())?;
        let height = i32::try_from(config.height).map_err(|_| invalid())?;

        Ok(Self {
            width,
            height,
            tile_size: config.tile_size,
            cells: FxHashMap::default(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    // ── Coordinate conversion ─────────────────────────────────────────────

    fn offsets(&self) -> (f32, f32) {
        ((self.width - 1) as f32 * 0.5, (self.height - 1) as f32 * 0.5)
    }

    /// Centre of `pos` in world space.  Out-of-bounds cells extrapolate.
    pub fn grid_to_world(&self, pos: Position) -> WorldPoint {
        let (ox, oy) = self.offsets();
        WorldPoint::new(
            (pos.x as f32 - ox) * self.tile_size,
            (pos.y as f32 - oy) * self.tile_size,
        )
    }

    /// Cell containing `world`.  The result may be out of bounds.
    pub fn world_to_grid(&self, world: WorldPoint) -> Position {
        let (ox, oy) = self.offsets();
        Position::new(
            (world.x / self.tile_size + ox).round_ties_even() as i32,
            (world.z / self.tile_size + oy).round_ties_even() as i32,
        )
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Manhattan distance.
    #[inline]
    pub fn distance(&self, a: Position, b: Position) -> u32 {
        a.manhattan(b)
    }

    #[inline]
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// In bounds and unoccupied.
    #[inline]
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.is_within_bounds(pos) && !self.cells.contains_key(&pos)
    }

    #[inline]
    pub fn agent_at(&self, pos: Position) -> Option<AgentId> {
        self.cells.get(&pos).copied()
    }

    /// `true` if the agent's recorded cell maps back to it.
    pub fn is_registered(&self, agent: &Agent) -> bool {
        self.agent_at(agent.position()) == Some(agent.id())
    }

    pub fn clamp_to_bounds(&self, pos: Position) -> Position {
        Position::new(pos.x.clamp(0, self.width - 1), pos.y.clamp(0, self.height - 1))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, AgentId)> + '_ {
        self.cells.iter().map(|(&p, &a)| (p, a))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move `agent` to `target`.
    ///
    /// Returns `false` and changes nothing if `target` is not walkable or the
    /// agent is not registered at its recorded cell.  On success the old
    /// entry, the new entry and the agent's position all change together.
    pub fn try_move(&mut self, agent: &mut Agent, target: Position) -> bool {
        if !self.is_walkable(target) || !self.is_registered(agent) {
            return false;
        }
        let from = agent.position();
        self.cells.remove(&from);
        self.cells.insert(target, agent.id());
        agent.set_position(target);
        trace!(agent = %agent.id(), %from, to = %target, "moved");
        true
    }

    /// Insert an entry at the agent's recorded cell.
    ///
    /// Declines (returns `false`) if the cell is out of bounds or held by a
    /// different agent.  Registering an agent twice at the same cell is a
    /// harmless no-op that returns `true`.
    pub fn register(&mut self, agent: &Agent) -> bool {
        let pos = agent.position();
        if !self.is_within_bounds(pos) {
            return false;
        }
        match self.cells.get(&pos) {
            Some(&other) if other != agent.id() => {
                warn!(agent = %agent.id(), %pos, occupant = %other, "register declined: cell occupied");
                false
            }
            _ => {
                self.cells.insert(pos, agent.id());
                true
            }
        }
    }

    /// Remove the agent's entry.  No-op if its recorded cell does not map
    /// to it.
    pub fn unregister(&mut self, agent: &Agent) {
        let pos = agent.position();
        if self.cells.get(&pos) == Some(&agent.id()) {
            self.cells.remove(&pos);
        }
    }

    /// Clear and re-register every active, living agent in roster order.
    pub fn rebuild(&mut self, roster: &AgentRoster) {
        self.cells.clear();
        for agent in roster.iter().filter(|a| a.is_active() && a.is_alive()) {
            self.register(agent);
        }
        trace!(occupied = self.cells.len(), "occupancy rebuilt");
    }

    /// Check the occupancy invariant against `roster`.
    ///
    /// Every active, living, in-bounds agent must be registered at its
    /// recorded cell, and every entry must point at such an agent.
    pub fn verify(&self, roster: &AgentRoster) -> GridResult<()> {
        for (&pos, &id) in &self.cells {
            match roster.get(id) {
                Some(a) if a.is_active() && a.is_alive() && a.position() == pos => {}
                _ => return Err(GridError::StaleEntry { pos, agent: id }),
            }
        }
        for agent in roster.iter().filter(|a| a.is_active() && a.is_alive()) {
            let pos = agent.position();
            if !self.is_within_bounds(pos) {
                continue;
            }
            match self.agent_at(pos) {
                Some(id) if id == agent.id() => {}
                Some(found) => {
                    return Err(GridError::WrongOccupant { pos, expected: agent.id(), found });
                }
                None => return Err(GridError::Unregistered { agent: agent.id(), pos }),
            }
        }
        Ok(())
    }
}
