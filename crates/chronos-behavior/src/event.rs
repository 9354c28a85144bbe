//! Turn events: what an agent's turn did to the world.

use chronos_core::{AgentId, Position};

use crate::AttackOutcome;

/// Something observable that happened during a turn.
///
/// Events are produced by [`AgentTurn::advance`][crate::AgentTurn::advance]
/// in the order they occur and consumed by the scheduler, which forwards them
/// to its observer.  They carry no state needed for correctness.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnEvent {
    /// Nearest hostile agent chosen.
    TargetSelected { agent: AgentId, target: AgentId },

    /// No living hostile agent exists; move and attack are skipped.
    NoTarget { agent: AgentId },

    /// Agent stepped one cell.
    Moved { agent: AgentId, from: Position, to: Position },

    /// Step toward the target was refused (occupied or off-grid).
    MoveBlocked { agent: AgentId, at: Position, toward: Position },

    /// Damage was applied.
    Attacked(AttackOutcome),

    /// The target's health reached zero; it left the grid.
    Died { agent: AgentId, at: Position },
}
