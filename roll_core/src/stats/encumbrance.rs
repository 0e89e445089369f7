//! Encumbrance - carrying limits derived from Strength

use serde::{Deserialize, Serialize};

/// Maximum carried weight in pounds: `strength * 15`
///
/// The threshold helpers saturate at the bounds of `i32` instead of
/// overflowing.
pub fn carrying_capacity(strength: i32) -> i32 {
    strength.saturating_mul(15)
}

/// Weight above which a character is encumbered: `strength * 5`
pub fn encumbered_threshold(strength: i32) -> i32 {
    strength.saturating_mul(5)
}

/// Weight above which a character is heavily encumbered: `strength * 10`
pub fn heavily_encumbered_threshold(strength: i32) -> i32 {
    strength.saturating_mul(10)
}

/// Total weight of `(weight_per_item, quantity)` pairs
pub fn total_carried_weight<I>(items: I) -> f64
where
    I: IntoIterator<Item = (f64, u32)>,
{
    items.into_iter().map(|(weight, qty)| weight * qty as f64).sum()
}

/// Format a weight for display ("1 lb", "12.5 lbs")
pub fn format_weight(weight: f64) -> String {
    if (weight - 1.0).abs() < f64::EPSILON {
        format!("{} lb", weight)
    } else {
        format!("{} lbs", weight)
    }
}

/// Encumbrance band for a carried weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncumbranceLevel {
    Normal,
    Encumbered,
    HeavilyEncumbered,
    OverCapacity,
}

impl EncumbranceLevel {
    /// Classify a weight. Each band starts strictly above its threshold.
    pub fn classify(total_weight: f64, strength: i32) -> Self {
        if total_weight > carrying_capacity(strength) as f64 {
            EncumbranceLevel::OverCapacity
        } else if total_weight > heavily_encumbered_threshold(strength) as f64 {
            EncumbranceLevel::HeavilyEncumbered
        } else if total_weight > encumbered_threshold(strength) as f64 {
            EncumbranceLevel::Encumbered
        } else {
            EncumbranceLevel::Normal
        }
    }

    /// Speed reduction in feet; `None` means the character cannot move
    pub fn speed_penalty(&self) -> Option<u32> {
        match self {
            EncumbranceLevel::Normal => Some(0),
            EncumbranceLevel::Encumbered => Some(10),
            EncumbranceLevel::HeavilyEncumbered => Some(20),
            EncumbranceLevel::OverCapacity => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EncumbranceLevel::Normal => "Normal",
            EncumbranceLevel::Encumbered => "Encumbered",
            EncumbranceLevel::HeavilyEncumbered => "Heavily Encumbered",
            EncumbranceLevel::OverCapacity => "Over Capacity",
        }
    }
}
