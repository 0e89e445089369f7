//! CharacterSheet - the inputs a session rolls against
//!
//! Only inputs are stored. Everything derived (modifiers, proficiency bonus,
//! encumbrance) is recomputed on every read.

use super::{ability_check, saving_throw, skill_check, ProficiencyLevel, Skill};
use crate::dice::RollSpecification;
use crate::stats::{
    carrying_capacity, encumbered_threshold, heavily_encumbered_threshold, level_from_xp,
    proficiency_bonus, xp_threshold_for_next_level, AbilityScoreSet, EncumbranceLevel,
};
use crate::types::Ability;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub ability_scores: AbilityScoreSet,
    /// Skills with single proficiency
    #[serde(default)]
    pub proficient_skills: Vec<Skill>,
    /// Skills with double proficiency
    #[serde(default)]
    pub expertise_skills: Vec<Skill>,
    #[serde(default)]
    pub saving_throws: Vec<Ability>,
    /// Current carried weight in pounds
    #[serde(default)]
    pub carried_weight: f64,
}

fn default_level() -> i32 {
    1
}

impl Default for CharacterSheet {
    fn default() -> Self {
        CharacterSheet {
            name: "Adventurer".to_string(),
            level: 1,
            experience: 0,
            ability_scores: AbilityScoreSet::default(),
            proficient_skills: Vec::new(),
            expertise_skills: Vec::new(),
            saving_throws: Vec::new(),
            carried_weight: 0.0,
        }
    }
}

impl CharacterSheet {
    pub fn proficiency_bonus(&self) -> i32 {
        proficiency_bonus(self.level)
    }

    /// Expertise wins over plain proficiency if a skill is listed twice
    pub fn skill_proficiency(&self, skill: Skill) -> ProficiencyLevel {
        if self.expertise_skills.contains(&skill) {
            ProficiencyLevel::Expertise
        } else if self.proficient_skills.contains(&skill) {
            ProficiencyLevel::Proficient
        } else {
            ProficiencyLevel::None
        }
    }

    pub fn is_save_proficient(&self, ability: Ability) -> bool {
        self.saving_throws.contains(&ability)
    }

    /// Level implied by the recorded experience
    pub fn level_from_experience(&self) -> i32 {
        level_from_xp(self.experience)
    }

    pub fn next_level_xp(&self) -> u32 {
        xp_threshold_for_next_level(self.level)
    }

    /// XP still missing for the next level (0 at the cap)
    pub fn xp_remaining(&self) -> u32 {
        self.next_level_xp().saturating_sub(self.experience)
    }

    pub fn ability_check(&self, ability: Ability) -> RollSpecification {
        ability_check(&self.ability_scores, ability)
    }

    pub fn saving_throw(&self, ability: Ability) -> RollSpecification {
        saving_throw(
            &self.ability_scores,
            ability,
            self.is_save_proficient(ability),
            self.proficiency_bonus(),
        )
    }

    pub fn skill_check(&self, skill: Skill) -> RollSpecification {
        skill_check(
            &self.ability_scores,
            skill,
            self.skill_proficiency(skill),
            self.proficiency_bonus(),
        )
    }

    pub fn carrying_capacity(&self) -> i32 {
        carrying_capacity(self.ability_scores.strength)
    }

    pub fn encumbered_threshold(&self) -> i32 {
        encumbered_threshold(self.ability_scores.strength)
    }

    pub fn heavily_encumbered_threshold(&self) -> i32 {
        heavily_encumbered_threshold(self.ability_scores.strength)
    }

    pub fn encumbrance(&self) -> EncumbranceLevel {
        EncumbranceLevel::classify(self.carried_weight, self.ability_scores.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"
name = "Mira"
level = 5
experience = 7000
saving_throws = ["dexterity", "intelligence"]
proficient_skills = ["stealth", "arcana"]
expertise_skills = ["stealth"]
carried_weight = 80.0

[ability_scores]
strength = 10
dexterity = 16
constitution = 12
intelligence = 15
wisdom = 11
charisma = 9
"#;

    #[test]
    fn test_parse_sheet() {
        let sheet: CharacterSheet = toml::from_str(SHEET).unwrap();
        assert_eq!(sheet.name, "Mira");
        assert_eq!(sheet.proficiency_bonus(), 3);
        assert_eq!(sheet.level_from_experience(), 5);
        assert_eq!(sheet.next_level_xp(), 14000);
        assert_eq!(sheet.xp_remaining(), 7000);
    }

    #[test]
    fn test_sheet_rolls() {
        let sheet: CharacterSheet = toml::from_str(SHEET).unwrap();

        assert_eq!(sheet.skill_proficiency(Skill::Stealth), ProficiencyLevel::Expertise);
        assert_eq!(sheet.skill_check(Skill::Stealth).modifier, 3 + 6);
        assert_eq!(sheet.skill_check(Skill::Arcana).modifier, 2 + 3);
        assert_eq!(sheet.skill_check(Skill::Athletics).modifier, 0);

        assert_eq!(sheet.saving_throw(Ability::Dexterity).modifier, 6);
        assert_eq!(sheet.saving_throw(Ability::Charisma).modifier, -1);
        assert_eq!(sheet.ability_check(Ability::Intelligence).modifier, 2);
    }

    #[test]
    fn test_sheet_encumbrance() {
        let sheet: CharacterSheet = toml::from_str(SHEET).unwrap();
        assert_eq!(sheet.carrying_capacity(), 150);
        assert_eq!(sheet.encumbered_threshold(), 50);
        assert_eq!(sheet.heavily_encumbered_threshold(), 100);
        assert_eq!(sheet.encumbrance(), EncumbranceLevel::Encumbered);
    }

    #[test]
    fn test_minimal_sheet_defaults() {
        let sheet: CharacterSheet = toml::from_str("name = \"Nobody\"").unwrap();
        assert_eq!(sheet.level, 1);
        assert_eq!(sheet.ability_scores, AbilityScoreSet::default());
        assert_eq!(sheet.encumbrance(), EncumbranceLevel::Normal);
        assert_eq!(sheet.xp_remaining(), 300);
    }
}
