//! Prelude module for convenient imports
//!
//! ```rust
//! use roll_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Ability, DieType, RollMode};

// Roll engine
pub use crate::dice::{
    parse_notation, DieSource, RollEngine, RollError, RollHistory, RollLog, RollOutcome,
    RollSpecification, SharedRollHistory,
};

// Calculators
pub use crate::stats::{
    ability_modifier, breakdown_from_base_currency, carrying_capacity,
    convert_to_base_currency, encumbered_threshold, heavily_encumbered_threshold, level_from_xp,
    proficiency_bonus, xp_threshold_for_next_level, AbilityScoreSet, CoinBreakdown, Denomination,
    EncumbranceLevel,
};

// Quick rolls
pub use crate::checks::{CharacterSheet, ProficiencyLevel, Skill};

// Config
pub use crate::config::{default_config, RollerConfig};
