//! roll_core - Dice rolling engine and D&D character arithmetic
//!
//! This library provides:
//! - RollEngine: Evaluates roll specifications (advantage/disadvantage on d20s)
//!   and records outcomes in an injected, bounded history
//! - Stat calculators: Ability modifiers, proficiency and XP tables,
//!   encumbrance, currency conversion
//! - Quick roll builders: Ability checks, saving throws and skill checks from
//!   a character sheet

pub mod checks;
pub mod config;
pub mod dice;
pub mod prelude;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use checks::{CharacterSheet, ProficiencyLevel, Skill};
pub use config::{default_config, ConfigError, RollerConfig};
pub use dice::{
    parse_notation, DieSource, NotationError, RollEngine, RollError, RollHistory, RollLog,
    RollOutcome, RollSpecification, RngDice, ScriptedDice, SessionEngine, SharedRollHistory,
};
pub use stats::{AbilityScoreSet, CoinBreakdown, Denomination, EncumbranceLevel};
pub use types::{Ability, DieType, RollMode};
