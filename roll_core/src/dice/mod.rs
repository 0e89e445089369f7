//! Roll engine - dice sources, roll specifications, outcomes and history

mod engine;
mod history;
mod notation;
mod outcome;
mod source;
mod spec;

pub use engine::{RollEngine, SessionEngine};
pub use history::{RollHistory, RollLog, SharedRollHistory, DEFAULT_HISTORY_CAPACITY};
pub use notation::{parse_notation, NotationError};
pub use outcome::RollOutcome;
pub use source::{DieSource, RngDice, ScriptedDice};
pub use spec::RollSpecification;

use thiserror::Error;

/// Contract violations rejected by the roll engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    #[error("Unsupported die: d{0} (expected d4, d6, d8, d10, d12, d20 or d100)")]
    UnsupportedDie(u32),
}
