//! RollSpecification - what to roll

use super::RollError;
use crate::types::{DieType, RollMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input to the roll engine: `count` dice of one type plus a flat modifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSpecification {
    pub die: DieType,
    /// Number of dice (must be at least 1)
    pub count: u32,
    /// Added after summing the kept dice
    #[serde(default)]
    pub modifier: i32,
    #[serde(default)]
    pub mode: RollMode,
    /// Free-text annotation shown next to the result, e.g. "Strength Check"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RollSpecification {
    /// Create a normal-mode specification, rejecting a zero dice count
    pub fn new(die: DieType, count: u32, modifier: i32) -> Result<Self, RollError> {
        let spec = RollSpecification {
            die,
            count,
            modifier,
            mode: RollMode::Normal,
            label: None,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// A single d20 with a modifier, the shape of every check and save
    pub fn d20(modifier: i32) -> Self {
        RollSpecification {
            die: DieType::D20,
            count: 1,
            modifier,
            mode: RollMode::Normal,
            label: None,
        }
    }

    pub fn with_mode(mut self, mode: RollMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn validate(&self) -> Result<(), RollError> {
        if self.count == 0 {
            return Err(RollError::InvalidDiceCount);
        }
        Ok(())
    }

    /// Mode that actually applies: advantage and disadvantage only affect d20s
    pub fn effective_mode(&self) -> RollMode {
        if self.die.supports_advantage() {
            self.mode
        } else {
            RollMode::Normal
        }
    }

    /// Standard dice notation, e.g. "2d6+3", "1d20-1", "4d8"
    pub fn notation(&self) -> String {
        format_notation(self.count, self.die, self.modifier)
    }

    /// Expected total: each die averages (faces + 1) / 2
    pub fn average(&self) -> f64 {
        self.count as f64 * (self.die.faces() as f64 + 1.0) / 2.0 + self.modifier as f64
    }

    /// Lowest possible total
    pub fn min_total(&self) -> i64 {
        self.count as i64 + self.modifier as i64
    }

    /// Highest possible total
    pub fn max_total(&self) -> i64 {
        self.count as i64 * self.die.faces() as i64 + self.modifier as i64
    }
}

impl fmt::Display for RollSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

pub(crate) fn format_notation(count: u32, die: DieType, modifier: i32) -> String {
    match modifier {
        0 => format!("{}{}", count, die),
        m if m > 0 => format!("{}{}+{}", count, die, m),
        m => format!("{}{}{}", count, die, m),
    }
}
