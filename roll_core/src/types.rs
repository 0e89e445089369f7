//! Core types shared by the roll engine and the calculators

use crate::dice::RollError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported die sizes. Open-ended sizes are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieType {
    /// Get all die types, smallest first
    pub fn all() -> &'static [DieType] {
        &[
            DieType::D4,
            DieType::D6,
            DieType::D8,
            DieType::D10,
            DieType::D12,
            DieType::D20,
            DieType::D100,
        ]
    }

    /// Number of faces on the die
    pub fn faces(&self) -> u32 {
        match self {
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
            DieType::D12 => 12,
            DieType::D20 => 20,
            DieType::D100 => 100,
        }
    }

    /// Whether advantage and disadvantage apply to this die
    pub fn supports_advantage(&self) -> bool {
        *self == DieType::D20
    }

    /// Next larger die, wrapping back to d4
    pub fn next(&self) -> DieType {
        let all = Self::all();
        let idx = all.iter().position(|d| d == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Next smaller die, wrapping around to d100
    pub fn prev(&self) -> DieType {
        let all = Self::all();
        let idx = all.iter().position(|d| d == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl TryFrom<u32> for DieType {
    type Error = RollError;

    fn try_from(faces: u32) -> Result<Self, Self::Error> {
        DieType::all()
            .iter()
            .copied()
            .find(|d| d.faces() == faces)
            .ok_or(RollError::UnsupportedDie(faces))
    }
}

impl fmt::Display for DieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.faces())
    }
}

/// How many dice sets are drawn and which one counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollMode {
    #[default]
    Normal,
    /// Roll twice, keep the higher sum
    Advantage,
    /// Roll twice, keep the lower sum
    Disadvantage,
}

impl RollMode {
    pub fn all() -> &'static [RollMode] {
        &[RollMode::Normal, RollMode::Advantage, RollMode::Disadvantage]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RollMode::Normal => "Normal",
            RollMode::Advantage => "Advantage",
            RollMode::Disadvantage => "Disadvantage",
        }
    }

    /// Cycle Normal -> Advantage -> Disadvantage -> Normal
    pub fn cycle(&self) -> RollMode {
        match self {
            RollMode::Normal => RollMode::Advantage,
            RollMode::Advantage => RollMode::Disadvantage,
            RollMode::Disadvantage => RollMode::Normal,
        }
    }
}

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub fn all() -> &'static [Ability] {
        &[
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Intelligence,
            Ability::Wisdom,
            Ability::Charisma,
        ]
    }

    /// Three-letter label used on character sheets
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }
}
