//! Ability scores and modifiers

use crate::types::Ability;
use serde::{Deserialize, Serialize};

/// Modifier for an ability score: `floor((score - 10) / 2)`
pub fn ability_modifier(score: i32) -> i32 {
    // Rust's `/` truncates toward zero, scores below 10 need floor division.
    // Widened so the extremes of i32 cannot overflow; the result always fits.
    (i64::from(score) - 10).div_euclid(2) as i32
}

/// Format a bonus with an explicit sign ("+3", "-1", "+0")
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        modifier.to_string()
    }
}

/// The six ability scores of a character
///
/// Scores are expected in `[1, 30]` but nothing here enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScoreSet {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for AbilityScoreSet {
    fn default() -> Self {
        AbilityScoreSet {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AbilityScoreSet {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }

    /// Modifiers for all six abilities
    pub fn modifiers(&self) -> AbilityModifiers {
        AbilityModifiers {
            strength: ability_modifier(self.strength),
            dexterity: ability_modifier(self.dexterity),
            constitution: ability_modifier(self.constitution),
            intelligence: ability_modifier(self.intelligence),
            wisdom: ability_modifier(self.wisdom),
            charisma: ability_modifier(self.charisma),
        }
    }
}

/// Computed modifiers, one per ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityModifiers {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ability_modifier_table() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(20), 5);
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(30), 10);
    }

    #[test]
    fn test_negative_scores_floor() {
        // Nonsensical but well defined
        assert_eq!(ability_modifier(-1), -6);
        assert_eq!(ability_modifier(0), -5);
    }

    #[test]
    fn test_extreme_scores_do_not_overflow() {
        assert_eq!(ability_modifier(i32::MIN), -1_073_741_829);
        assert_eq!(ability_modifier(i32::MAX), 1_073_741_818);
    }

    #[test]
    fn test_format_modifier() {
        assert_eq!(format_modifier(3), "+3");
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(-2), "-2");
    }

    #[test]
    fn test_score_set_modifiers() {
        let scores = AbilityScoreSet {
            strength: 16,
            dexterity: 14,
            constitution: 13,
            intelligence: 8,
            wisdom: 12,
            charisma: 7,
        };
        let mods = scores.modifiers();
        assert_eq!(mods.strength, 3);
        assert_eq!(mods.dexterity, 2);
        assert_eq!(mods.constitution, 1);
        assert_eq!(mods.intelligence, -1);
        assert_eq!(mods.wisdom, 1);
        assert_eq!(mods.charisma, -2);
        assert_eq!(scores.modifier(Ability::Strength), 3);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut scores = AbilityScoreSet::default();
        for (i, ability) in Ability::all().iter().enumerate() {
            scores.set(*ability, 10 + i as i32);
        }
        assert_eq!(scores.get(Ability::Charisma), 15);
        assert_eq!(scores.get(Ability::Strength), 10);
    }

    proptest! {
        #[test]
        fn prop_modifier_is_floor_half(score in -100i32..=100) {
            let m = ability_modifier(score);
            prop_assert!(2 * m <= score - 10);
            prop_assert!(score - 10 < 2 * m + 2);
        }
    }
}
