//! Mutable world view handed to a turn.

use chronos_agent::AgentRoster;
use chronos_grid::GridIndex;

/// The roster and occupancy index, borrowed together for one transition.
///
/// The two fields are separate borrows so a turn can hold `&mut Agent` from
/// the roster while moving it through the grid.
pub struct TurnContext<'a> {
    pub roster: &'a mut AgentRoster,
    pub grid:   &'a mut GridIndex,
}

impl<'a> TurnContext<'a> {
    #[inline]
    pub fn new(roster: &'a mut AgentRoster, grid: &'a mut GridIndex) -> Self {
        Self { roster, grid }
    }
}
