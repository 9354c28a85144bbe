//! The per-turn state machine.

use std::time::Duration;

use tracing::{debug, trace};

use chronos_core::{AgentId, Pacer, PacingConfig};

use crate::{TurnContext, TurnEvent, combat, select_target, step_toward};

/// Where a turn currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    PreDelay,
    SelectTarget,
    MoveIfNeeded,
    AttackIfInRange,
    PostDelay,
    Done,
}

/// What the driver should do after one [`AgentTurn::advance`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnStep {
    /// Pause for the duration, then advance again.
    Wait(Duration),
    /// Advance again immediately.
    Continue,
    /// The turn is over; further calls keep returning `Done`.
    Done,
}

/// One agent's turn, advanced one transition at a time.
#[derive(Clone, Debug)]
pub struct AgentTurn {
    agent:  AgentId,
    phase:  TurnPhase,
    target: Option<AgentId>,
}

impl AgentTurn {
    pub fn new(agent: AgentId) -> Self {
        Self { agent, phase: TurnPhase::PreDelay, target: None }
    }

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The chosen target, once `SelectTarget` has run.
    #[inline]
    pub fn target(&self) -> Option<AgentId> {
        self.target
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == TurnPhase::Done
    }

    /// Perform one transition, appending anything observable to `events`.
    pub fn advance(
        &mut self,
        ctx:    &mut TurnContext<'_>,
        pacing: &PacingConfig,
        events: &mut Vec<TurnEvent>,
    ) -> TurnStep {
        match self.phase {
            TurnPhase::PreDelay => {
                let alive = ctx.roster.get(self.agent).is_some_and(|a| a.is_alive());
                if !alive {
                    self.phase = TurnPhase::Done;
                    return TurnStep::Done;
                }
                self.phase = TurnPhase::SelectTarget;
                TurnStep::Wait(pacing.pre_action_delay())
            }

            TurnPhase::SelectTarget => {
                self.target = select_target(ctx.roster, ctx.grid, self.agent);
                events.push(match self.target {
                    Some(target) => TurnEvent::TargetSelected { agent: self.agent, target },
                    None         => TurnEvent::NoTarget { agent: self.agent },
                });
                trace!(agent = %self.agent, target = ?self.target, "target selected");
                self.phase = TurnPhase::MoveIfNeeded;
                TurnStep::Continue
            }

            TurnPhase::MoveIfNeeded => {
                self.move_if_needed(ctx, events);
                self.phase = TurnPhase::AttackIfInRange;
                TurnStep::Continue
            }

            TurnPhase::AttackIfInRange => {
                self.attack_if_in_range(ctx, events);
                self.phase = TurnPhase::PostDelay;
                TurnStep::Continue
            }

            TurnPhase::PostDelay => {
                self.phase = TurnPhase::Done;
                TurnStep::Wait(pacing.post_action_delay())
            }

            TurnPhase::Done => TurnStep::Done,
        }
    }

    /// Drive the turn to `Done`, pausing on `pacer` at each delay.
    pub fn run_to_completion<P: Pacer>(
        &mut self,
        ctx:    &mut TurnContext<'_>,
        pacing: &PacingConfig,
        pacer:  &mut P,
        events: &mut Vec<TurnEvent>,
    ) {
        loop {
            match self.advance(ctx, pacing, events) {
                TurnStep::Wait(d)  => pacer.advance(d),
                TurnStep::Continue => {}
                TurnStep::Done     => return,
            }
        }
    }

    // ── Phase bodies ──────────────────────────────────────────────────────

    fn move_if_needed(&self, ctx: &mut TurnContext<'_>, events: &mut Vec<TurnEvent>) {
        let Some(target) = self.target else { return };
        let Some(goal) = ctx.roster.get(target).map(|t| t.position()) else { return };
        let Some(me) = ctx.roster.get_mut(self.agent) else { return };

        let from = me.position();
        if ctx.grid.distance(from, goal) <= me.attack_range() {
            return;
        }

        let next = step_toward(ctx.grid, from, goal);
        if ctx.grid.try_move(me, next) {
            events.push(TurnEvent::Moved { agent: self.agent, from, to: next });
        } else {
            debug!(agent = %self.agent, at = %from, toward = %next, "move blocked");
            events.push(TurnEvent::MoveBlocked { agent: self.agent, at: from, toward: next });
        }
    }

    fn attack_if_in_range(&self, ctx: &mut TurnContext<'_>, events: &mut Vec<TurnEvent>) {
        let Some(target) = self.target else { return };
        let (Some(me), Some(them)) = (ctx.roster.get(self.agent), ctx.roster.get(target)) else {
            return;
        };
        if ctx.grid.distance(me.position(), them.position()) > me.attack_range() {
            return;
        }

        if let Some(outcome) = combat::attack(ctx.roster, ctx.grid, self.agent, target) {
            events.push(TurnEvent::Attacked(outcome));
            if outcome.killed {
                events.push(TurnEvent::Died { agent: target, at: outcome.target_position });
            }
        }
    }
}
