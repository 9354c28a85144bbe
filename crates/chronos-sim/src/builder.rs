//! Fluent builder for constructing a [`TurnScheduler`].

use rustc_hash::FxHashMap;

use chronos_agent::AgentRoster;
use chronos_core::{AgentId, PacingConfig, Position};
use chronos_grid::{GridConfig, GridIndex};

use crate::{SchedulerError, SchedulerResult, TurnScheduler};

/// Fluent builder for [`TurnScheduler`].
///
/// # Required inputs
///
/// - [`AgentRoster`]: from [`chronos_agent::RosterBuilder`] or the CSV loader
/// - [`GridIndex`]: the battlefield; any existing entries are discarded
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                     |
/// |----------------|-----------------------------|
/// | `.pacing(p)`   | `PacingConfig::default()`   |
///
/// # Example
///
/// ```rust,ignore
/// let roster = RosterBuilder::new()
///     .agent("knight", Team::Ally, Position::new(0, 0), AgentStats::default())
///     .build()?;
/// let grid = GridIndex::new(&GridConfig::default())?;
/// let mut scheduler = SchedulerBuilder::new(roster, grid)
///     .pacing(PacingConfig::instant())
///     .build()?;
/// scheduler.run_turns(10, &mut NoopPacer, &mut NoopObserver);
/// ```
pub struct SchedulerBuilder {
    roster: AgentRoster,
    grid:   GridIndex,
    pacing: Option<PacingConfig>,
}

impl SchedulerBuilder {
    pub fn new(roster: AgentRoster, grid: GridIndex) -> Self {
        Self { roster, grid, pacing: None }
    }

    /// Build the grid from `config` instead of passing an index in.
    pub fn with_grid_config(roster: AgentRoster, config: &GridConfig) -> SchedulerResult<Self> {
        Ok(Self::new(roster, GridIndex::new(config)?))
    }

    /// Override the loop's pause durations.
    pub fn pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Validate starting positions, register every living agent, build the
    /// initial queue, and return a ready-to-step [`TurnScheduler`].
    pub fn build(mut self) -> SchedulerResult<TurnScheduler> {
        if self.roster.is_empty() {
            return Err(SchedulerError::EmptyRoster);
        }

        // ── Validate placement ────────────────────────────────────────────
        let mut claimed: FxHashMap<Position, AgentId> = FxHashMap::default();
        for agent in self.roster.iter().filter(|a| a.is_active() && a.is_alive()) {
            let pos = agent.position();
            if !self.grid.is_within_bounds(pos) {
                return Err(SchedulerError::OutOfBounds { agent: agent.id(), pos });
            }
            if let Some(&first) = claimed.get(&pos) {
                return Err(SchedulerError::CellConflict { pos, first, second: agent.id() });
            }
            claimed.insert(pos, agent.id());
        }

        // ── Register ──────────────────────────────────────────────────────
        self.grid.rebuild(&self.roster);
        self.grid.verify(&self.roster)?;

        Ok(TurnScheduler::new(
            self.pacing.unwrap_or_default(),
            self.roster,
            self.grid,
        ))
    }
}
