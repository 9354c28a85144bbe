//! `chronos-behavior`: what an agent does on its turn.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`context`]   | `TurnContext<'a>`: mutable world view for one turn             |
//! | [`targeting`] | `select_target`, `step_toward`                                 |
//! | [`combat`]    | `attack`, `AttackOutcome`                                      |
//! | [`event`]     | `TurnEvent`: what happened, for observers and logs             |
//! | [`turn`]      | `AgentTurn` state machine, `TurnPhase`, `TurnStep`             |
//!
//! # Turn state machine
//!
//! ```text
//! PreDelay → SelectTarget → MoveIfNeeded → AttackIfInRange → PostDelay → Done
//! ```
//!
//! Each call to [`AgentTurn::advance`] performs one transition.  Only the two
//! delay phases ask the caller to pause; every other phase runs without
//! suspending.  A turn is never cancelled once started.

pub mod combat;
pub mod context;
pub mod event;
pub mod targeting;
pub mod turn;


pub use combat::{AttackOutcome, attack};
pub use context::TurnContext;
pub use event::TurnEvent;
pub use targeting::{select_target, step_toward};
pub use turn::{AgentTurn, TurnPhase, TurnStep};
