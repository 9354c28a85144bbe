//! `chronos-grid`: the occupancy map agents move across.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`index`]   | `GridIndex` (cell → agent map), `GridConfig`                |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Invariant
//!
//! Each cell holds at most one agent, and every active agent's recorded
//! position maps back to that agent.  `GridIndex` maintains this for moves,
//! registration and death; after a snapshot restore writes positions
//! directly, [`GridIndex::rebuild`] re-derives the map from the roster.

pub mod error;
pub mod index;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use index::{GridConfig, GridIndex};
