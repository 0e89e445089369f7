//! Quick roll builders - turn a character's numbers into roll specifications

mod sheet;
mod skill;

pub use sheet::CharacterSheet;
pub use skill::{ProficiencyLevel, Skill};

use crate::dice::RollSpecification;
use crate::stats::AbilityScoreSet;
use crate::types::Ability;

/// Straight ability check: 1d20 + ability modifier
pub fn ability_check(scores: &AbilityScoreSet, ability: Ability) -> RollSpecification {
    RollSpecification::d20(scores.modifier(ability))
        .with_label(format!("{} Check", ability.abbreviation()))
}

/// Saving throw: 1d20 + ability modifier, plus the proficiency bonus when
/// proficient in the save
pub fn saving_throw(
    scores: &AbilityScoreSet,
    ability: Ability,
    proficient: bool,
    proficiency_bonus: i32,
) -> RollSpecification {
    let bonus = if proficient { proficiency_bonus } else { 0 };
    RollSpecification::d20(scores.modifier(ability).saturating_add(bonus))
        .with_label(format!("{} Save", ability.abbreviation()))
}

/// Skill check: 1d20 + governing ability modifier + proficiency bonus scaled
/// by the proficiency level (none, single, expertise)
pub fn skill_check(
    scores: &AbilityScoreSet,
    skill: Skill,
    proficiency: ProficiencyLevel,
    proficiency_bonus: i32,
) -> RollSpecification {
    let modifier = skill_bonus(scores, skill, proficiency, proficiency_bonus);
    let label = match proficiency {
        ProficiencyLevel::None => skill.display_name().to_string(),
        ProficiencyLevel::Proficient => format!("{} (Prof)", skill.display_name()),
        ProficiencyLevel::Expertise => format!("{} (Expertise)", skill.display_name()),
    };
    RollSpecification::d20(modifier).with_label(label)
}

/// Flat bonus a skill check adds to the d20
pub fn skill_bonus(
    scores: &AbilityScoreSet,
    skill: Skill,
    proficiency: ProficiencyLevel,
    proficiency_bonus: i32,
) -> i32 {
    scores
        .modifier(skill.ability())
        .saturating_add(proficiency_bonus.saturating_mul(proficiency.multiplier()))
}
