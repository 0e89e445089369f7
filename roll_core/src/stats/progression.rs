//! Level progression - proficiency bonus and experience tables

/// Highest character level
pub const MAX_LEVEL: i32 = 20;

/// Bonus returned for any level outside the table
pub const DEFAULT_PROFICIENCY_BONUS: i32 = 2;

/// Proficiency bonus by level. Index is level - 1.
pub const PROFICIENCY_BY_LEVEL: [i32; 20] = [
    2, 2, 2, 2, // 1-4
    3, 3, 3, 3, // 5-8
    4, 4, 4, 4, // 9-12
    5, 5, 5, 5, // 13-16
    6, 6, 6, 6, // 17-20
];

/// Cumulative XP needed to reach each level. Index is level - 1.
pub const XP_BY_LEVEL: [u32; 20] = [
    0,      // Level 1
    300,    // Level 2
    900,    // Level 3
    2700,   // Level 4
    6500,   // Level 5
    14000,  // Level 6
    23000,  // Level 7
    34000,  // Level 8
    48000,  // Level 9
    64000,  // Level 10
    85000,  // Level 11
    100000, // Level 12
    120000, // Level 13
    140000, // Level 14
    165000, // Level 15
    195000, // Level 16
    225000, // Level 17
    265000, // Level 18
    305000, // Level 19
    355000, // Level 20
];

/// Proficiency bonus for a level; levels outside 1-20 get the default of 2
pub fn proficiency_bonus(level: i32) -> i32 {
    if (1..=MAX_LEVEL).contains(&level) {
        PROFICIENCY_BY_LEVEL[(level - 1) as usize]
    } else {
        DEFAULT_PROFICIENCY_BONUS
    }
}

/// Cumulative XP threshold of a level, clamped into 1-20
pub fn xp_for_level(level: i32) -> u32 {
    XP_BY_LEVEL[(level.clamp(1, MAX_LEVEL) - 1) as usize]
}

/// XP needed to reach the level after `level`
///
/// At level 20 and above there is nothing further, so the level 20
/// threshold is returned.
pub fn xp_threshold_for_next_level(level: i32) -> u32 {
    if level >= MAX_LEVEL {
        return XP_BY_LEVEL[(MAX_LEVEL - 1) as usize];
    }
    xp_for_level(level + 1)
}

/// Highest level whose threshold has been reached, never below 1
pub fn level_from_xp(xp: u32) -> i32 {
    XP_BY_LEVEL
        .iter()
        .rposition(|threshold| xp >= *threshold)
        .map(|idx| idx as i32 + 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_bonus() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(9), 4);
        assert_eq!(proficiency_bonus(16), 5);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(20), 6);
    }

    #[test]
    fn test_proficiency_bonus_fallback() {
        assert_eq!(proficiency_bonus(99), 2);
        assert_eq!(proficiency_bonus(0), 2);
        assert_eq!(proficiency_bonus(-3), 2);
        assert_eq!(proficiency_bonus(21), 2);
    }

    #[test]
    fn test_proficiency_matches_closed_form() {
        for level in 1..=MAX_LEVEL {
            assert_eq!(proficiency_bonus(level), (level - 1) / 4 + 2);
        }
    }

    #[test]
    fn test_next_level_threshold() {
        assert_eq!(xp_threshold_for_next_level(1), 300);
        assert_eq!(xp_threshold_for_next_level(4), 6500);
        assert_eq!(xp_threshold_for_next_level(19), 355000);
        assert_eq!(xp_threshold_for_next_level(20), 355000);
        assert_eq!(xp_threshold_for_next_level(35), 355000);
        assert_eq!(xp_threshold_for_next_level(0), 0);
    }

    #[test]
    fn test_level_from_xp() {
        assert_eq!(level_from_xp(0), 1);
        assert_eq!(level_from_xp(299), 1);
        assert_eq!(level_from_xp(300), 2);
        assert_eq!(level_from_xp(6499), 4);
        assert_eq!(level_from_xp(354999), 19);
        assert_eq!(level_from_xp(355000), 20);
        assert_eq!(level_from_xp(u32::MAX), 20);
    }

    #[test]
    fn test_level_and_threshold_agree() {
        for level in 1..MAX_LEVEL {
            let next = xp_threshold_for_next_level(level);
            assert_eq!(level_from_xp(next), level + 1);
            assert_eq!(level_from_xp(next - 1), level);
        }
    }
}
