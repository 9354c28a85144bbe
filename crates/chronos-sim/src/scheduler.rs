//! The `TurnScheduler` struct and its turn loop.

use std::mem;
use std::time::Duration;

use tracing::{debug, info};

use chronos_agent::{Agent, AgentRoster};
use chronos_behavior::{AgentTurn, TurnContext, TurnEvent, TurnStep};
use chronos_core::{AgentId, Pacer, PacingConfig, Position, Team, TurnNumber};
use chronos_grid::GridIndex;

use crate::{Snapshot, SnapshotStore, TurnObserver, TurnQueue};

// ── Loop state ────────────────────────────────────────────────────────────────

/// What the driver should do after one [`TurnScheduler::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopStep {
    /// Pause for the duration, then step again.
    Wait(Duration),
    /// Step again immediately.
    Continue,
    /// A dead or unknown agent was dequeued and discarded.  No pause.
    Skipped(AgentId),
    /// Nobody is alive to take a turn.  Stepping again changes nothing
    /// until an external trigger alters the roster.
    Stalled,
}

/// How [`TurnScheduler::run_until_done`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Every agent on the other team is dead.
    Victory(Team),
    /// No living agent remains on either side.
    Stalled,
    /// The turn limit was reached with both teams still standing.
    TurnLimit,
}

#[derive(Debug)]
pub(crate) enum LoopPhase {
    /// Nothing has happened yet; the first step issues the start delay.
    Starting,
    /// Between turns.  The next step applies a pending rewind or dequeues.
    BetweenTurns,
    /// An agent's state machine is running.
    InTurn(AgentTurn),
}

// ── TurnScheduler ─────────────────────────────────────────────────────────────

/// Drives agents through their turns in initiative order.
///
/// The scheduler owns the roster and the occupancy index so that every
/// mutation goes through the turn machinery or one of the trigger methods
/// below.  Drive it with [`step`](Self::step) from a game loop, or with
/// [`run_turns`](Self::run_turns) / [`run_until_done`](Self::run_until_done)
/// and a [`Pacer`].
///
/// One step is one transition:
///
/// ```text
/// Starting ─▶ BetweenTurns ─▶ InTurn(PreDelay … PostDelay) ─▶ BetweenTurns ─▶ …
///   start_delay            dequeue, snapshot          turn_delay
/// ```
///
/// Trigger methods (`request_rewind`, `adjust_initiative`,
/// `grant_immediate_turn`) may be called between any two steps.  Initiative
/// changes apply at once; a rewind waits until no turn is in flight.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
#[derive(Debug)]
pub struct TurnScheduler {
    pub(crate) pacing:    PacingConfig,
    pub(crate) roster:    AgentRoster,
    pub(crate) grid:      GridIndex,
    pub(crate) queue:     TurnQueue,
    pub(crate) snapshots: SnapshotStore,

    /// The agent whose turn is running, or the last one to act until the
    /// next dequeue.  Cleared by a rewind.
    pub(crate) current: Option<AgentId>,

    pub(crate) rewind_requested: bool,

    /// Set by every rebuild, cleared once observers have been told.
    pub(crate) queue_rebuilt: bool,

    pub(crate) phase:           LoopPhase,
    pub(crate) turn:            TurnNumber,
    pub(crate) turns_completed: u64,

    /// Scratch buffer reused across transitions.
    pub(crate) events: Vec<TurnEvent>,
}

impl TurnScheduler {
    pub(crate) fn new(pacing: PacingConfig, roster: AgentRoster, grid: GridIndex) -> Self {
        let mut scheduler = Self {
            pacing,
            roster,
            grid,
            queue:            TurnQueue::new(),
            snapshots:        SnapshotStore::new(),
            current:          None,
            rewind_requested: false,
            queue_rebuilt:    false,
            phase:            LoopPhase::Starting,
            turn:             TurnNumber::ZERO,
            turns_completed:  0,
            events:           Vec::new(),
        };
        scheduler.build_queue();
        scheduler
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn roster(&self) -> &AgentRoster {
        &self.roster
    }

    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.roster.get(id)
    }

    pub fn agent_at(&self, pos: Position) -> Option<AgentId> {
        self.grid.agent_at(pos)
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.grid.is_walkable(pos)
    }

    /// The acting agent, or the last one to act if no turn is in flight.
    /// `None` after a rewind until the next dequeue.
    pub fn current(&self) -> Option<AgentId> {
        self.current
    }

    /// Number of the most recently started turn.
    pub fn turn(&self) -> TurnNumber {
        self.turn
    }

    pub fn turns_completed(&self) -> u64 {
        self.turns_completed
    }

    pub fn is_turn_in_progress(&self) -> bool {
        matches!(self.phase, LoopPhase::InTurn(_))
    }

    pub fn is_rewind_pending(&self) -> bool {
        self.rewind_requested
    }

    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.snapshots.latest()
    }

    /// The current agent (if any) followed by everyone still queued.
    pub fn queue_preview(&self) -> Vec<AgentId> {
        self.current.into_iter().chain(self.queue.iter()).collect()
    }

    /// Winner if exactly one team still has living agents.
    pub fn victor(&self) -> Option<Team> {
        let standing = |team: Team| self.roster.alive_count(team) > 0;
        [Team::Ally, Team::Enemy]
            .into_iter()
            .find(|&team| standing(team) && !standing(team.opponent()))
    }

    // ── Triggers ──────────────────────────────────────────────────────────

    /// Discard the queue and rebuild it from living agents: speed
    /// descending, then `AgentId` ascending.
    pub fn build_queue(&mut self) {
        self.queue.rebuild(&self.roster);
        self.queue_rebuilt = true;
        debug!(len = self.queue.len(), "turn queue rebuilt");
    }

    /// Ask for the world to be put back to its state before the latest turn.
    ///
    /// Applied once the in-flight turn finishes, or by the next step if none
    /// is running.  Returns `false` and does nothing if no snapshot has
    /// been captured yet.
    pub fn request_rewind(&mut self) -> bool {
        if !self.snapshots.has_snapshot() {
            debug!("rewind requested with no snapshot; ignored");
            return false;
        }
        self.rewind_requested = true;
        true
    }

    /// Add `delta` to the speed of every living agent on `team`, flooring at
    /// 1, then rebuild the queue.
    pub fn adjust_initiative(&mut self, team: Team, delta: i32) {
        let mut touched = 0usize;
        for agent in self.roster.iter_mut().filter(|a| a.team() == team && a.is_alive()) {
            agent.set_speed(agent.speed().saturating_add(delta));
            touched += 1;
        }
        info!(team = %team, delta, agents = touched, "initiative adjusted");
        self.build_queue();
    }

    /// Move the fastest living agent of `team` to the front of the queue.
    ///
    /// Ties go to the agent that comes first in the roster.  Nothing happens
    /// if `team` has no living agent or its fastest agent is the current
    /// one.  Returns the promoted agent.
    pub fn grant_immediate_turn(&mut self, team: Team) -> Option<AgentId> {
        let mut best: Option<&Agent> = None;
        for agent in self.roster.alive_on(team) {
            if best.is_none_or(|b| agent.speed() > b.speed()) {
                best = Some(agent);
            }
        }
        let candidate = best?.id();
        if self.current == Some(candidate) {
            return None;
        }
        self.queue.promote(candidate);
        info!(team = %team, agent = %candidate, "immediate turn granted");
        Some(candidate)
    }

    // ── Loop ──────────────────────────────────────────────────────────────

    /// Perform one transition of the turn loop.
    pub fn step<O: TurnObserver>(&mut self, observer: &mut O) -> LoopStep {
        self.notify_queue_rebuilt(observer);

        let result = match mem::replace(&mut self.phase, LoopPhase::BetweenTurns) {
            LoopPhase::Starting => LoopStep::Wait(self.pacing.start_delay),
            LoopPhase::BetweenTurns => self.begin_next_turn(observer),
            LoopPhase::InTurn(turn) => self.advance_turn(turn, observer),
        };

        self.notify_queue_rebuilt(observer);
        result
    }

    /// Step until `n` more turns have completed or the loop stalls, pausing
    /// on `pacer` wherever the loop asks to wait.  Returns the number of
    /// turns completed.
    pub fn run_turns<P: Pacer, O: TurnObserver>(
        &mut self,
        n:        u64,
        pacer:    &mut P,
        observer: &mut O,
    ) -> u64 {
        let start = self.turns_completed;
        while self.turns_completed - start < n {
            match self.step(observer) {
                LoopStep::Wait(d)                        => pacer.advance(d),
                LoopStep::Continue | LoopStep::Skipped(_) => {}
                LoopStep::Stalled                        => break,
            }
        }
        self.turns_completed - start
    }

    /// Step until one team is eliminated, the loop stalls, or `max_turns`
    /// more turns have completed.
    ///
    /// A pending rewind is always applied before a winner is declared, so a
    /// rewind requested on the killing blow still brings the victim back.
    pub fn run_until_done<P: Pacer, O: TurnObserver>(
        &mut self,
        max_turns: u64,
        pacer:     &mut P,
        observer:  &mut O,
    ) -> BattleOutcome {
        let start = self.turns_completed;
        loop {
            if !self.is_turn_in_progress() && !self.rewind_requested {
                if let Some(team) = self.victor() {
                    return BattleOutcome::Victory(team);
                }
                if self.turns_completed - start >= max_turns {
                    return BattleOutcome::TurnLimit;
                }
            }
            match self.step(observer) {
                LoopStep::Wait(d)                        => pacer.advance(d),
                LoopStep::Continue | LoopStep::Skipped(_) => {}
                LoopStep::Stalled                        => return BattleOutcome::Stalled,
            }
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    fn begin_next_turn<O: TurnObserver>(&mut self, observer: &mut O) -> LoopStep {
        if self.rewind_requested {
            self.apply_rewind(observer);
            return LoopStep::Continue;
        }

        if self.queue.is_empty() {
            self.build_queue();
        }
        let Some(next) = self.queue.pop_front() else {
            self.current = None;
            debug!("no living agents; loop stalled");
            return LoopStep::Stalled;
        };

        if !self.roster.get(next).is_some_and(|a| a.is_alive()) {
            self.current = None;
            debug!(agent = %next, "dequeued agent is dead or unknown; skipped");
            return LoopStep::Skipped(next);
        }

        let turn = self.turn.next();
        self.snapshots.capture(&self.roster, turn);
        self.turn = turn;
        self.current = Some(next);

        if let Some(agent) = self.roster.get(next) {
            debug!(turn = turn.0, agent = %next, name = agent.name(), speed = agent.speed(), "turn start");
            observer.on_turn_start(turn, agent);
        }
        self.phase = LoopPhase::InTurn(AgentTurn::new(next));
        LoopStep::Continue
    }

    fn advance_turn<O: TurnObserver>(&mut self, mut turn: AgentTurn, observer: &mut O) -> LoopStep {
        let mut ctx = TurnContext::new(&mut self.roster, &mut self.grid);
        let step = turn.advance(&mut ctx, &self.pacing, &mut self.events);

        for event in self.events.drain(..) {
            observer.on_event(self.turn, &event);
        }

        match step {
            TurnStep::Wait(d) => {
                self.phase = LoopPhase::InTurn(turn);
                LoopStep::Wait(d)
            }
            TurnStep::Continue => {
                self.phase = LoopPhase::InTurn(turn);
                LoopStep::Continue
            }
            TurnStep::Done => {
                self.finish_turn(turn.agent(), observer);
                LoopStep::Wait(self.pacing.turn_delay)
            }
        }
    }

    fn finish_turn<O: TurnObserver>(&mut self, agent: AgentId, observer: &mut O) {
        self.turns_completed += 1;
        if let Some(a) = self.roster.get(agent) {
            observer.on_turn_end(self.turn, a);
        }
        debug!(turn = self.turn.0, agent = %agent, "turn end");

        if self.rewind_requested {
            self.apply_rewind(observer);
        }
        self.phase = LoopPhase::BetweenTurns;
    }

    fn apply_rewind<O: TurnObserver>(&mut self, observer: &mut O) {
        self.rewind_requested = false;
        let Some((reverted, revived)) = self.snapshots.restore(&mut self.roster, &mut self.grid)
        else {
            return;
        };
        info!(reverted = reverted.0, revived, "rewind applied");
        self.current = None;
        observer.on_rewind(reverted, &self.roster);
        self.build_queue();
    }

    fn notify_queue_rebuilt<O: TurnObserver>(&mut self, observer: &mut O) {
        if mem::take(&mut self.queue_rebuilt) {
            let queue: Vec<AgentId> = self.queue.iter().collect();
            observer.on_queue_rebuilt(&queue);
        }
    }
}
