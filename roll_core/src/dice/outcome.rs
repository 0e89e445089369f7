//! RollOutcome - the immutable result of one evaluation

use super::spec::format_notation;
use crate::types::{DieType, RollMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of evaluating a roll specification
///
/// `created_at` only orders and ages entries in a history feed; it is not
/// part of the roll's arithmetic. Deserializing recomputes `count`, `sum`
/// and `total` from the dice, so stored totals are never trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OutcomeRecord")]
pub struct RollOutcome {
    die: DieType,
    count: u32,
    modifier: i32,
    mode: RollMode,
    kept_values: Vec<u32>,
    discarded_values: Vec<u32>,
    sum: i64,
    total: i64,
    created_at: DateTime<Utc>,
    label: Option<String>,
}

/// Serialized form of an outcome, minus the derived fields
#[derive(Deserialize)]
struct OutcomeRecord {
    die: DieType,
    modifier: i32,
    #[serde(default)]
    mode: RollMode,
    kept_values: Vec<u32>,
    #[serde(default)]
    discarded_values: Vec<u32>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    label: Option<String>,
}

impl From<OutcomeRecord> for RollOutcome {
    fn from(record: OutcomeRecord) -> Self {
        RollOutcome::new(
            record.die,
            record.modifier,
            record.mode,
            record.kept_values,
            record.discarded_values,
            record.created_at,
            record.label,
        )
    }
}

impl RollOutcome {
    pub(crate) fn new(
        die: DieType,
        modifier: i32,
        mode: RollMode,
        kept_values: Vec<u32>,
        discarded_values: Vec<u32>,
        created_at: DateTime<Utc>,
        label: Option<String>,
    ) -> Self {
        let sum: i64 = kept_values.iter().map(|v| *v as i64).sum();
        RollOutcome {
            die,
            count: kept_values.len() as u32,
            modifier,
            mode,
            kept_values,
            discarded_values,
            sum,
            total: sum + modifier as i64,
            created_at,
            label,
        }
    }

    pub fn die(&self) -> DieType {
        self.die
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Mode the caller asked for (may be a no-op on non-d20 dice)
    pub fn mode(&self) -> RollMode {
        self.mode
    }

    /// Die values that count toward the total
    pub fn kept_values(&self) -> &[u32] {
        &self.kept_values
    }

    /// The alternate set from an advantage/disadvantage d20 roll, else empty
    pub fn discarded_values(&self) -> &[u32] {
        &self.discarded_values
    }

    /// Sum of the kept dice
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Sum plus modifier
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn notation(&self) -> String {
        format_notation(self.count, self.die, self.modifier)
    }

    /// Sum of the discarded set, if one was drawn
    pub fn discarded_sum(&self) -> Option<i64> {
        if self.discarded_values.is_empty() {
            None
        } else {
            Some(self.discarded_values.iter().map(|v| *v as i64).sum())
        }
    }

    /// A single d20 that landed on 20
    pub fn is_natural_max(&self) -> bool {
        self.die == DieType::D20 && self.kept_values == [20]
    }

    /// A single d20 that landed on 1
    pub fn is_natural_one(&self) -> bool {
        self.die == DieType::D20 && self.kept_values == [1]
    }

    /// Human readable age relative to `now`
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let secs = (now - self.created_at).num_seconds();
        let mins = secs.div_euclid(60);
        let hours = mins.div_euclid(60);

        if secs < 60 {
            "Just now".to_string()
        } else if mins < 60 {
            format!("{}m ago", mins)
        } else if hours < 24 {
            format!("{}h ago", hours)
        } else {
            self.created_at.format("%H:%M:%S").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn outcome(kept: Vec<u32>, discarded: Vec<u32>, modifier: i32) -> RollOutcome {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        RollOutcome::new(DieType::D20, modifier, RollMode::Normal, kept, discarded, at, None)
    }

    #[test]
    fn test_sum_and_total() {
        let o = outcome(vec![4, 9], vec![], -2);
        assert_eq!(o.count(), 2);
        assert_eq!(o.sum(), 13);
        assert_eq!(o.total(), 11);
        assert_eq!(o.notation(), "2d20-2");
        assert_eq!(o.discarded_sum(), None);
    }

    #[test]
    fn test_deserialize_recomputes_totals() {
        let json = r#"{
            "die": "d6",
            "count": 9,
            "modifier": 3,
            "mode": "normal",
            "kept_values": [2, 5],
            "discarded_values": [],
            "sum": 1000,
            "total": 1003,
            "created_at": "2024-05-01T12:00:00Z",
            "label": null
        }"#;
        let o: RollOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(o.count(), 2);
        assert_eq!(o.sum(), 7);
        assert_eq!(o.total(), 10);
    }

    #[test]
    fn test_json_round_trip_keeps_outcome() {
        let o = outcome(vec![20], vec![4], 5);
        let back: RollOutcome = serde_json::from_str(&serde_json::to_string(&o).unwrap()).unwrap();
        assert_eq!(back, o);
    }

    #[test]
    fn test_natural_flags() {
        assert!(outcome(vec![20], vec![], 0).is_natural_max());
        assert!(outcome(vec![1], vec![], 5).is_natural_one());
        assert!(!outcome(vec![20, 3], vec![], 0).is_natural_max());
    }

    #[test]
    fn test_age_label() {
        let o = outcome(vec![10], vec![], 0);
        let at = o.created_at();
        assert_eq!(o.age_label(at + Duration::seconds(30)), "Just now");
        assert_eq!(o.age_label(at + Duration::minutes(5)), "5m ago");
        assert_eq!(o.age_label(at + Duration::hours(3)), "3h ago");
        assert_eq!(o.age_label(at + Duration::days(2)), "12:00:00");
    }
}
