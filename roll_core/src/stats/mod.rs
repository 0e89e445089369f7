//! Derived stat calculators - pure functions over character numbers
//!
//! None of these validate their inputs. Out-of-range scores and levels
//! produce well-defined arithmetic or fall back to the documented defaults.

mod ability;
mod currency;
mod encumbrance;
mod progression;

pub use ability::{ability_modifier, format_modifier, AbilityModifiers, AbilityScoreSet};
pub use currency::{
    breakdown_from_base_currency, breakdown_from_base_currency_up_to, convert_to_base_currency,
    CoinBreakdown, Denomination,
};
pub use encumbrance::{
    carrying_capacity, encumbered_threshold, format_weight, heavily_encumbered_threshold,
    total_carried_weight, EncumbranceLevel,
};
pub use progression::{
    level_from_xp, proficiency_bonus, xp_for_level, xp_threshold_for_next_level,
    DEFAULT_PROFICIENCY_BONUS, MAX_LEVEL, PROFICIENCY_BY_LEVEL, XP_BY_LEVEL,
};
