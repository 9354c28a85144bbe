use chronos_core::{ChronosError, Team};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid stats for agent {name:?}: {reason}")]
    InvalidStats { name: String, reason: String },

    #[error("duplicate agent name {0:?}")]
    DuplicateName(String),

    #[error("cannot scatter {requested} {team} agents: only {available} free cells")]
    NoFreeCells {
        team:      Team,
        requested: usize,
        available: usize,
    },

    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] ChronosError),
}

pub type RosterResult<T> = Result<T, RosterError>;
