//! Grid-subsystem error type.

use thiserror::Error;

use chronos_core::{AgentId, Position};

/// Errors produced by `chronos-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid grid {width}x{height} with tile size {tile_size}")]
    InvalidDimensions { width: u32, height: u32, tile_size: f32 },

    #[error("cell {pos} maps to {found}, expected {expected}")]
    WrongOccupant { pos: Position, expected: AgentId, found: AgentId },

    #[error("active agent {agent} at {pos} is not in the index")]
    Unregistered { agent: AgentId, pos: Position },

    #[error("cell {pos} maps to {agent}, which is inactive or elsewhere")]
    StaleEntry { pos: Position, agent: AgentId },
}

pub type GridResult<T> = Result<T, GridError>;
