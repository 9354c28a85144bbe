//! Fluent builder for constructing an `AgentRoster`.
//!
//! # Usage
//!
//! ```rust
//! use chronos_agent::{AgentStats, RosterBuilder, ScatterSpec};
//! use chronos_core::{Position, Team};
//!
//! let roster = RosterBuilder::new()
//!     .agent("knight", Team::Ally, Position::new(0, 0), AgentStats::default())
//!     .with_seed(42)
//!     .scatter(ScatterSpec::new(Team::Enemy, 3, AgentStats::default(), 10, 10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(roster.len(), 4);
//! assert_eq!(roster.alive_count(Team::Enemy), 3);
//! ```

use std::collections::HashSet;

use chronos_core::{AgentId, Position, SimRng, Team};

use crate::{Agent, AgentRoster, AgentStats, RosterError, RosterResult};

/// Request to place `count` agents of `team` on random free cells of a
/// `width × height` area.
#[derive(Clone, Debug)]
pub struct ScatterSpec {
    pub team:   Team,
    pub count:  usize,
    pub stats:  AgentStats,
    pub width:  u32,
    pub height: u32,
}

impl ScatterSpec {
    pub fn new(team: Team, count: usize, stats: AgentStats, width: u32, height: u32) -> Self {
        Self { team, count, stats, width, height }
    }
}

struct PlacedSpec {
    name:     String,
    team:     Team,
    position: Position,
    stats:    AgentStats,
}

/// Fluent builder for [`AgentRoster`].
///
/// Explicitly placed agents receive ids in call order; scattered agents are
/// appended after them, one scatter request at a time.
#[derive(Default)]
pub struct RosterBuilder {
    placed:   Vec<PlacedSpec>,
    scatters: Vec<ScatterSpec>,
    seed:     u64,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an agent at an explicit cell.
    pub fn agent(
        mut self,
        name:     impl Into<String>,
        team:     Team,
        position: Position,
        stats:    AgentStats,
    ) -> Self {
        self.placed.push(PlacedSpec { name: name.into(), team, position, stats });
        self
    }

    /// Seed used by [`scatter`](Self::scatter).  Default: 0.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Place agents on random free cells.  Names are `"{team}-{n}"`, counting
    /// from 1 per team across all scatter requests.
    pub fn scatter(mut self, spec: ScatterSpec) -> Self {
        self.scatters.push(spec);
        self
    }

    /// Validate stats and names, resolve scatter placement, and build.
    pub fn build(self) -> RosterResult<AgentRoster> {
        let mut agents: Vec<Agent> = Vec::with_capacity(
            self.placed.len() + self.scatters.iter().map(|s| s.count).sum::<usize>(),
        );
        let mut names: HashSet<String> = HashSet::new();
        let mut taken: HashSet<Position> = HashSet::new();

        for spec in self.placed {
            push_agent(&mut agents, &mut names, spec.name, spec.team, spec.stats, spec.position)?;
            taken.insert(spec.position);
        }

        let mut root = SimRng::new(self.seed);
        let mut ally_seq = 0usize;
        let mut enemy_seq = 0usize;

        for (i, scatter) in self.scatters.into_iter().enumerate() {
            let mut rng = root.child(i as u64);

            let mut free: Vec<Position> = (0..scatter.height as i32)
                .flat_map(|y| (0..scatter.width as i32).map(move |x| Position::new(x, y)))
                .filter(|p| !taken.contains(p))
                .collect();
            if free.len() < scatter.count {
                return Err(RosterError::NoFreeCells {
                    team:      scatter.team,
                    requested: scatter.count,
                    available: free.len(),
                });
            }
            rng.shuffle(&mut free);

            for &cell in free.iter().take(scatter.count) {
                let seq = match scatter.team {
                    Team::Ally  => { ally_seq += 1; ally_seq }
                    Team::Enemy => { enemy_seq += 1; enemy_seq }
                };
                let name = format!("{}-{seq}", scatter.team);
                push_agent(&mut agents, &mut names, name, scatter.team, scatter.stats, cell)?;
                taken.insert(cell);
            }
        }

        Ok(AgentRoster::from_agents(agents))
    }
}

fn push_agent(
    agents:   &mut Vec<Agent>,
    names:    &mut HashSet<String>,
    name:     String,
    team:     Team,
    stats:    AgentStats,
    position: Position,
) -> RosterResult<()> {
    stats
        .validate()
        .map_err(|reason| RosterError::InvalidStats { name: name.clone(), reason })?;
    if !names.insert(name.clone()) {
        return Err(RosterError::DuplicateName(name));
    }
    let id = AgentId::try_from(agents.len())
        .map_err(|e| RosterError::Parse(format!("too many agents: {e}")))?;
    agents.push(Agent::new(id, name, team, stats, position));
    Ok(())
}
