//! DieSource - where individual die values come from

use rand::Rng;

/// Anything that can produce a single die value in `[1, faces]`
pub trait DieSource {
    fn roll_die(&mut self, faces: u32) -> u32;

    /// Roll `count` dice of the same size
    fn roll_dice(&mut self, faces: u32, count: u32) -> Vec<u32> {
        (0..count).map(|_| self.roll_die(faces)).collect()
    }
}

/// Uniform dice backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: Rng> DieSource for RngDice<R> {
    fn roll_die(&mut self, faces: u32) -> u32 {
        self.rng.gen_range(1..=faces)
    }
}

/// Replays a fixed sequence of die values, cycling when exhausted
///
/// Values outside `[1, faces]` are clamped so every produced value stays
/// a legal face of the die being rolled.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    values: Vec<u32>,
    position: usize,
}

impl ScriptedDice {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        ScriptedDice {
            values: values.into(),
            position: 0,
        }
    }

    /// Number of values handed out so far
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self, faces: u32) -> u32 {
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value.clamp(1, faces.max(1))
    }
}
