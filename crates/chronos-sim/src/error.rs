use chronos_agent::RosterError;
use chronos_core::{AgentId, Position};
use chronos_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("agent {agent} starts outside the grid at {pos}")]
    OutOfBounds { agent: AgentId, pos: Position },

    #[error("agents {first} and {second} both start at {pos}")]
    CellConflict {
        pos:    Position,
        first:  AgentId,
        second: AgentId,
    },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("roster error: {0}")]
    Roster(#[from] RosterError),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
