//! RollEngine - evaluate roll specifications against a die source

use super::{
    DieSource, RngDice, RollError, RollHistory, RollLog, RollOutcome, RollSpecification,
};
use crate::config::RollerConfig;
use crate::types::RollMode;
use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Engine used by an interactive session: ChaCha dice and an owned history
pub type SessionEngine = RollEngine<RngDice<ChaCha8Rng>, RollHistory>;

/// Rolls dice and records every outcome in the history it was given
///
/// The history is injected so the owning session decides its lifetime and
/// whether it is shared (see [`super::SharedRollHistory`]).
#[derive(Debug, Clone)]
pub struct RollEngine<S: DieSource, L: RollLog = RollHistory> {
    source: S,
    history: L,
}

impl<S: DieSource, L: RollLog> RollEngine<S, L> {
    pub fn new(source: S, history: L) -> Self {
        RollEngine { source, history }
    }

    /// Evaluate a specification and record the outcome
    ///
    /// 1. Draws `count` dice
    /// 2. On a d20 with advantage/disadvantage, draws a second set and keeps
    ///    the higher/lower sum (ties keep the first set)
    /// 3. Totals the kept dice and applies the modifier
    /// 4. Pushes the outcome to the front of the history
    pub fn evaluate(&mut self, spec: &RollSpecification) -> Result<RollOutcome, RollError> {
        if let Err(e) = spec.validate() {
            tracing::warn!("Rejected roll {:?}: {}", spec, e);
            return Err(e);
        }

        let faces = spec.die.faces();
        let first = self.source.roll_dice(faces, spec.count);

        let (kept, discarded) = match spec.effective_mode() {
            RollMode::Normal => (first, Vec::new()),
            RollMode::Advantage => {
                let second = self.source.roll_dice(faces, spec.count);
                if set_sum(&first) >= set_sum(&second) {
                    (first, second)
                } else {
                    (second, first)
                }
            }
            RollMode::Disadvantage => {
                let second = self.source.roll_dice(faces, spec.count);
                if set_sum(&first) <= set_sum(&second) {
                    (first, second)
                } else {
                    (second, first)
                }
            }
        };

        let outcome = RollOutcome::new(
            spec.die,
            spec.modifier,
            spec.mode,
            kept,
            discarded,
            Utc::now(),
            spec.label.clone(),
        );

        tracing::debug!(
            "Rolled {} ({}): kept {:?}, discarded {:?}, total {}",
            outcome.notation(),
            spec.mode.name(),
            outcome.kept_values(),
            outcome.discarded_values(),
            outcome.total()
        );

        self.history.record(outcome.clone());
        Ok(outcome)
    }

    /// Empty the history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &L {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut L {
        &mut self.history
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<L: RollLog> RollEngine<RngDice<ChaCha8Rng>, L> {
    /// Reproducible engine: the same seed yields the same dice
    pub fn seeded(seed: u64, history: L) -> Self {
        RollEngine::new(RngDice::new(ChaCha8Rng::seed_from_u64(seed)), history)
    }

    /// Unpredictable engine seeded from OS entropy
    pub fn from_entropy(history: L) -> Self {
        RollEngine::new(RngDice::new(ChaCha8Rng::from_entropy()), history)
    }
}

impl SessionEngine {
    /// Build an engine from configuration, seeding from entropy when no seed
    /// is configured
    pub fn from_config(config: &RollerConfig) -> Self {
        let history = RollHistory::with_capacity(config.history.capacity);
        match config.dice.seed {
            Some(seed) => RollEngine::seeded(seed, history),
            None => RollEngine::from_entropy(history),
        }
    }
}

fn set_sum(values: &[u32]) -> u64 {
    values.iter().map(|v| *v as u64).sum()
}
