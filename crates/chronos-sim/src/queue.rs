//! `TurnQueue`: agents waiting to act before the next rebuild.
//!
//! The queue is a plain FIFO of `AgentId`s.  Ordering is decided once, at
//! rebuild time, from the speeds the agents have *then*; later speed changes
//! only take effect at the next rebuild.  The one exception is
//! [`TurnQueue::promote`], which moves a single agent to the front without
//! reordering anyone else.

use std::collections::VecDeque;

use chronos_agent::AgentRoster;
use chronos_core::AgentId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnQueue {
    inner: VecDeque<AgentId>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue of every living agent, fastest first, equal speeds in
    /// ascending id order.
    pub fn build_from_roster(roster: &AgentRoster) -> Self {
        let mut queue = Self::new();
        queue.rebuild(roster);
        queue
    }

    /// Replace the contents with a fresh ordering of `roster`.
    pub fn rebuild(&mut self, roster: &AgentRoster) {
        let mut alive: Vec<(i32, AgentId)> =
            roster.alive().map(|a| (a.speed(), a.id())).collect();
        alive.sort_unstable_by(|(sa, ia), (sb, ib)| sb.cmp(sa).then(ia.cmp(ib)));
        self.inner.clear();
        self.inner.extend(alive.into_iter().map(|(_, id)| id));
    }

    /// Remove and return the next agent to act.
    pub fn pop_front(&mut self) -> Option<AgentId> {
        self.inner.pop_front()
    }

    /// Put `agent` at the front, keeping everyone else in their current
    /// relative order.  Works whether or not `agent` was already queued.
    pub fn promote(&mut self, agent: AgentId) {
        self.inner.retain(|&a| a != agent);
        self.inner.push_front(agent);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Next agent to act, without removing it.
    pub fn peek(&self) -> Option<AgentId> {
        self.inner.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.inner.iter().copied()
    }
}
