//! Nearest-enemy selection and greedy single-cell stepping.

use chronos_agent::AgentRoster;
use chronos_core::{AgentId, Position};
use chronos_grid::GridIndex;

/// Nearest living hostile agent to `agent`, by Euclidean distance between
/// world-space cell centres.
///
/// Ties go to whichever candidate the roster enumerates first.  Roster order
/// is id order, but no other meaning is attached to it: two enemies at the
/// same distance are picked by enumeration, not by any game rule.
pub fn select_target(roster: &AgentRoster, grid: &GridIndex, agent: AgentId) -> Option<AgentId> {
    let me = roster.get(agent)?;
    let origin = grid.grid_to_world(me.position());

    let mut best: Option<(AgentId, f32)> = None;
    for other in roster.iter() {
        if !other.is_alive() || !me.is_hostile_to(other) {
            continue;
        }
        let d = origin.distance(grid.grid_to_world(other.position()));
        if best.is_none_or(|(_, closest)| d < closest) {
            best = Some((other.id(), d));
        }
    }
    best.map(|(id, _)| id)
}

/// One greedy step from `from` toward `to`.
///
/// Moves ±1 along the axis with the larger absolute delta (x wins ties),
/// then clamps into the grid.  Never moves more than one cell.
pub fn step_toward(grid: &GridIndex, from: Position, to: Position) -> Position {
    let delta = to - from;
    let mut next = from;
    if delta.x.abs() >= delta.y.abs() {
        next.x += delta.x.signum();
    } else {
        next.y += delta.y.signum();
    }
    grid.clamp_to_bounds(next)
}
