//! Scheduler observer trait for logging, UI refresh, and data collection.

use chronos_agent::{Agent, AgentRoster};
use chronos_behavior::TurnEvent;
use chronos_core::{AgentId, TurnNumber};

/// Callbacks invoked by [`TurnScheduler::step`][crate::TurnScheduler::step]
/// at key points in the turn loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers get read-only views.
///
/// # Example: combat log
///
/// ```rust,ignore
/// struct CombatLog;
///
/// impl TurnObserver for CombatLog {
///     fn on_event(&mut self, turn: TurnNumber, event: &TurnEvent) {
///         if let TurnEvent::Died { agent, .. } = event {
///             println!("{turn}: {agent} fell");
///         }
///     }
/// }
/// ```
pub trait TurnObserver {
    /// A living agent was dequeued and its snapshot captured.
    fn on_turn_start(&mut self, _turn: TurnNumber, _agent: &Agent) {}

    /// Something happened inside the running turn.
    fn on_event(&mut self, _turn: TurnNumber, _event: &TurnEvent) {}

    /// The turn's state machine reached `Done`.  Called before any pending
    /// rewind is applied.
    fn on_turn_end(&mut self, _turn: TurnNumber, _agent: &Agent) {}

    /// The world was restored to its state in front of `reverted`.
    fn on_rewind(&mut self, _reverted: TurnNumber, _roster: &AgentRoster) {}

    /// The pending queue was rebuilt.  Rebuilds triggered from outside the
    /// loop (initiative changes) are reported on the next `step`.
    fn on_queue_rebuilt(&mut self, _queue: &[AgentId]) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
