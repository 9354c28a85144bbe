//! `AgentRoster`: every agent the world knows about.

use chronos_core::{AgentId, ChronosError, ChronosResult, Team};

use crate::Agent;

/// All agents, dead or alive, indexed by `AgentId`.
///
/// `AgentId(i)` is always the agent at index `i`; the roster is append-only
/// during construction and fixed afterwards, so ids never dangle.  Iteration
/// order is ascending id, which is also the enumeration order nearest-target
/// selection uses to break distance ties.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRoster {
    agents: Vec<Agent>,
}

impl AgentRoster {
    pub(crate) fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Like [`get`](Self::get) but reports a missing id as an error.
    pub fn try_get(&self, id: AgentId) -> ChronosResult<&Agent> {
        self.get(id).ok_or(ChronosError::AgentNotFound(id))
    }

    /// Mutable borrows of two distinct agents at once (attacker + target).
    ///
    /// Returns `None` if either id is missing or both are the same agent.
    pub fn pair_mut(&mut self, a: AgentId, b: AgentId) -> Option<(&mut Agent, &mut Agent)> {
        let (ia, ib) = (a.index(), b.index());
        if ia == ib || ia >= self.agents.len() || ib >= self.agents.len() {
            return None;
        }
        if ia < ib {
            let (lo, hi) = self.agents.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.agents.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.agents.iter_mut()
    }

    /// All `AgentId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    /// Living agents, in roster order.
    pub fn alive(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter().filter(|a| a.is_alive())
    }

    /// Living agents on `team`, in roster order.
    pub fn alive_on(&self, team: Team) -> impl Iterator<Item = &Agent> + '_ {
        self.alive().filter(move |a| a.team() == team)
    }

    /// Number of living agents on `team`.
    pub fn alive_count(&self, team: Team) -> usize {
        self.alive_on(team).count()
    }

    /// Look an agent up by its display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name() == name)
    }
}
