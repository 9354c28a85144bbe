//! `chronos-agent`: agent state and roster storage for the `chronos` scheduler.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`stats`]     | `AgentStats` (base combat stats)                          |
//! | [`agent`]     | `Agent` (clamping mutators, derived liveness)             |
//! | [`roster`]    | `AgentRoster` (all known agents, indexed by `AgentId`)    |
//! | [`builder`]   | `RosterBuilder`, `ScatterSpec` (fluent construction)      |
//! | [`loader`]    | `load_roster_csv`, `load_roster_reader`                   |
//! | [`error`]     | `RosterError`, `RosterResult<T>`                          |
//!
//! The roster never shrinks.  A dead agent stays in it (inactive) so a
//! snapshot restore can bring it back.

pub mod agent;
pub mod builder;
pub mod error;
pub mod loader;
pub mod roster;
pub mod stats;


pub use agent::Agent;
pub use builder::{RosterBuilder, ScatterSpec};
pub use error::{RosterError, RosterResult};
pub use loader::{load_roster_csv, load_roster_reader};
pub use roster::AgentRoster;
pub use stats::AgentStats;
