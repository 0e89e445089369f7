//! Currency - coin denominations and gold-piece conversions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coin denominations, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    Copper,
    Silver,
    Gold,
    Platinum,
}

impl Denomination {
    pub fn all() -> &'static [Denomination] {
        &[
            Denomination::Copper,
            Denomination::Silver,
            Denomination::Gold,
            Denomination::Platinum,
        ]
    }

    /// Value of one coin in gold pieces
    pub fn gold_rate(&self) -> f64 {
        match self {
            Denomination::Copper => 0.01,
            Denomination::Silver => 0.1,
            Denomination::Gold => 1.0,
            Denomination::Platinum => 10.0,
        }
    }

    /// Value of one coin in copper pieces
    pub fn copper_value(&self) -> i64 {
        match self {
            Denomination::Copper => 1,
            Denomination::Silver => 10,
            Denomination::Gold => 100,
            Denomination::Platinum => 1000,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Denomination::Copper => "cp",
            Denomination::Silver => "sp",
            Denomination::Gold => "gp",
            Denomination::Platinum => "pp",
        }
    }
}

/// Value of `amount` coins in gold pieces
pub fn convert_to_base_currency(amount: i64, denomination: Denomination) -> f64 {
    amount as f64 * denomination.gold_rate()
}

/// Coin counts per denomination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinBreakdown {
    pub platinum: i64,
    pub gold: i64,
    pub silver: i64,
    pub copper: i64,
}

impl CoinBreakdown {
    pub fn get(&self, denomination: Denomination) -> i64 {
        match denomination {
            Denomination::Copper => self.copper,
            Denomination::Silver => self.silver,
            Denomination::Gold => self.gold,
            Denomination::Platinum => self.platinum,
        }
    }

    /// Total value in copper pieces
    pub fn total_copper(&self) -> i64 {
        Denomination::all()
            .iter()
            .map(|d| self.get(*d) * d.copper_value())
            .sum()
    }

    /// Total value in gold pieces
    pub fn total_gold(&self) -> f64 {
        self.total_copper() as f64 / 100.0
    }
}

impl fmt::Display for CoinBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pp {} gp {} sp {} cp",
            self.platinum, self.gold, self.silver, self.copper
        )
    }
}

/// Split a gold amount into platinum, gold, silver and copper
///
/// The amount is rounded to whole copper first, then each denomination
/// takes as many coins as fit, largest first.
pub fn breakdown_from_base_currency(gold: f64) -> CoinBreakdown {
    breakdown_from_base_currency_up_to(gold, Denomination::Platinum)
}

/// Like [`breakdown_from_base_currency`] but never uses coins larger than
/// `largest` (e.g. `Gold` keeps everything above gold as gold pieces)
pub fn breakdown_from_base_currency_up_to(gold: f64, largest: Denomination) -> CoinBreakdown {
    let mut remaining = (gold * 100.0).round() as i64;
    let mut breakdown = CoinBreakdown::default();

    for denomination in Denomination::all().iter().rev() {
        if *denomination > largest {
            continue;
        }
        let value = denomination.copper_value();
        let coins = remaining.div_euclid(value);
        remaining -= coins * value;
        match denomination {
            Denomination::Platinum => breakdown.platinum = coins,
            Denomination::Gold => breakdown.gold = coins,
            Denomination::Silver => breakdown.silver = coins,
            Denomination::Copper => breakdown.copper = coins,
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_convert_rates() {
        assert!((convert_to_base_currency(250, Denomination::Copper) - 2.5).abs() < 1e-9);
        assert!((convert_to_base_currency(7, Denomination::Silver) - 0.7).abs() < 1e-9);
        assert!((convert_to_base_currency(12, Denomination::Gold) - 12.0).abs() < 1e-9);
        assert!((convert_to_base_currency(3, Denomination::Platinum) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_greedy() {
        let b = breakdown_from_base_currency(12.34);
        assert_eq!(
            b,
            CoinBreakdown {
                platinum: 1,
                gold: 2,
                silver: 3,
                copper: 4
            }
        );
        assert_eq!(b.to_string(), "1 pp 2 gp 3 sp 4 cp");
    }

    #[test]
    fn test_breakdown_up_to_gold() {
        let b = breakdown_from_base_currency_up_to(12.34, Denomination::Gold);
        assert_eq!(
            b,
            CoinBreakdown {
                platinum: 0,
                gold: 12,
                silver: 3,
                copper: 4
            }
        );
    }

    #[test]
    fn test_breakdown_up_to_copper() {
        let b = breakdown_from_base_currency_up_to(1.5, Denomination::Copper);
        assert_eq!(b.copper, 150);
        assert_eq!(b.gold, 0);
    }

    #[test]
    fn test_breakdown_rounds_to_copper() {
        let b = breakdown_from_base_currency(0.006);
        assert_eq!(b.copper, 1);
        assert_eq!(breakdown_from_base_currency(0.0), CoinBreakdown::default());
    }

    #[test]
    fn test_totals() {
        let b = CoinBreakdown {
            platinum: 1,
            gold: 2,
            silver: 3,
            copper: 4,
        };
        assert_eq!(b.total_copper(), 1234);
        assert!((b.total_gold() - 12.34).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_a_copper(gold in 0.0f64..100_000.0) {
            let b = breakdown_from_base_currency(gold);
            prop_assert!((b.total_gold() - gold).abs() <= 0.005 + 1e-9);
            prop_assert!((0..10).contains(&b.gold));
            prop_assert!((0..10).contains(&b.silver));
            prop_assert!((0..10).contains(&b.copper));
        }

        #[test]
        fn prop_convert_then_breakdown(amount in 0i64..1_000_000, idx in 0usize..4) {
            let denomination = Denomination::all()[idx];
            let gold = convert_to_base_currency(amount, denomination);
            let b = breakdown_from_base_currency(gold);
            prop_assert_eq!(b.total_copper(), amount * denomination.copper_value());
        }
    }
}
