//! `chronos-sim`: turn loop orchestrator for the chronos scheduler.
//!
//! # Turn loop
//!
//! ```text
//! wait start_delay
//! loop:
//!   ① Rewind    apply a rewind requested while no turn was running, then
//!               step again before dequeuing.
//!   ② Dequeue   rebuild the queue if empty; pop the head.  Dead or unknown
//!               agents are discarded without delay.
//!   ③ Snapshot  record every agent's position, health and speed.
//!   ④ Turn      PreDelay → SelectTarget → MoveIfNeeded → AttackIfInRange
//!               → PostDelay → Done.
//!   ⑤ Rewind    if requested during the turn, restore ③ and rebuild.
//!   wait turn_delay
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`queue`]     | `TurnQueue`: initiative-ordered FIFO                     |
//! | [`snapshot`]  | `Snapshot`, `SnapshotStore`: single-turn undo            |
//! | [`observer`]  | `TurnObserver` hooks, `NoopObserver`                     |
//! | [`scheduler`] | `TurnScheduler`, `LoopStep`, `BattleOutcome`             |
//! | [`builder`]   | `SchedulerBuilder`                                       |
//! | [`abilities`] | `ChronosWand`, `AbilityConfig`                           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use chronos_core::{NoopPacer, PacingConfig};
//! use chronos_grid::GridConfig;
//! use chronos_sim::{NoopObserver, SchedulerBuilder};
//!
//! let roster = chronos_agent::load_roster_csv(path)?;
//! let mut scheduler = SchedulerBuilder::with_grid_config(roster, &GridConfig::default())?
//!     .pacing(PacingConfig::instant())
//!     .build()?;
//! let outcome = scheduler.run_until_done(500, &mut NoopPacer, &mut NoopObserver);
//! ```

pub mod abilities;
pub mod builder;
pub mod error;
pub mod observer;
pub mod queue;
pub mod scheduler;
pub mod snapshot;


pub use abilities::{AbilityConfig, ChronosWand};
pub use builder::SchedulerBuilder;
pub use error::{SchedulerError, SchedulerResult};
pub use observer::{NoopObserver, TurnObserver};
pub use queue::TurnQueue;
pub use scheduler::{BattleOutcome, LoopStep, TurnScheduler};
pub use snapshot::{RecordedState, Snapshot, SnapshotStore};
