//! `chronos-core`: foundational types for the `chronos` turn scheduler.
//!
//! This crate is a dependency of every other `chronos-*` crate.  It has no
//! `chronos-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`grid_pos`]    | `Position` (grid cell), `WorldPoint` (scene space)    |
//! | [`team`]        | `Team` enum                                           |
//! | [`time`]        | `TurnNumber`, `PacingConfig`, `Pacer` + impls         |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `ChronosError`, `ChronosResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod grid_pos;
pub mod ids;
pub mod rng;
pub mod team;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ChronosError, ChronosResult};
pub use grid_pos::{Position, WorldPoint};
pub use ids::AgentId;
pub use rng::SimRng;
pub use team::Team;
pub use time::{NoopPacer, Pacer, PacingConfig, SleepPacer, TurnNumber, VirtualClock};
