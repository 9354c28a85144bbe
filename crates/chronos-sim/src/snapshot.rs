//! Single-turn snapshots.
//!
//! A [`Snapshot`] records every agent's position, health and speed just
//! before a turn starts.  [`SnapshotStore`] keeps exactly one: capturing a
//! new snapshot drops the previous one, so only the latest turn can be
//! rewound.
//!
//! Restoring writes the recorded values straight onto the agents and then
//! rebuilds the occupancy index from scratch.  No attempt is made to patch
//! the index incrementally.

use rustc_hash::FxHashMap;

use chronos_agent::AgentRoster;
use chronos_core::{AgentId, Position, TurnNumber};
use chronos_grid::GridIndex;

/// The three fields a rewind puts back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecordedState {
    pub position: Position,
    pub health:   i32,
    pub speed:    i32,
}

/// Every known agent's state at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// The turn this snapshot was taken in front of.
    before_turn: TurnNumber,
    states:      FxHashMap<AgentId, RecordedState>,
}

impl Snapshot {
    /// Record every agent in `roster`, dead or alive.
    pub fn capture(roster: &AgentRoster, before_turn: TurnNumber) -> Self {
        let states = roster
            .iter()
            .map(|a| {
                (a.id(), RecordedState {
                    position: a.position(),
                    health:   a.health(),
                    speed:    a.speed(),
                })
            })
            .collect();
        Self { before_turn, states }
    }

    pub fn before_turn(&self) -> TurnNumber {
        self.before_turn
    }

    pub fn get(&self, agent: AgentId) -> Option<&RecordedState> {
        self.states.get(&agent)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Write the recorded state back and rebuild `grid` from `roster`.
    ///
    /// Agents recorded with health above zero are reactivated if they died
    /// since.  Returns the number of agents brought back.
    pub fn restore(&self, roster: &mut AgentRoster, grid: &mut GridIndex) -> usize {
        let mut revived = 0;
        for (&id, recorded) in &self.states {
            let Some(agent) = roster.get_mut(id) else { continue };
            agent.set_position(recorded.position);
            agent.set_health(recorded.health);
            agent.set_speed(recorded.speed);
            if recorded.health > 0 {
                if !agent.is_active() {
                    agent.activate();
                    revived += 1;
                }
            } else {
                agent.deactivate();
            }
        }
        grid.rebuild(roster);
        revived
    }
}

/// Holder for the most recent snapshot.
#[derive(Clone, Debug, Default)]
pub struct SnapshotStore {
    latest: Option<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `roster`, replacing whatever was stored.
    pub fn capture(&mut self, roster: &AgentRoster, before_turn: TurnNumber) {
        self.latest = Some(Snapshot::capture(roster, before_turn));
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    pub fn has_snapshot(&self) -> bool {
        self.latest.is_some()
    }

    /// Restore the stored snapshot, if any.
    ///
    /// Returns the turn the snapshot preceded and how many agents were
    /// revived, or `None` when nothing has been captured yet.
    pub fn restore(&self, roster: &mut AgentRoster, grid: &mut GridIndex) -> Option<(TurnNumber, usize)> {
        let snapshot = self.latest.as_ref()?;
        let revived = snapshot.restore(roster, grid);
        Some((snapshot.before_turn(), revived))
    }
}
