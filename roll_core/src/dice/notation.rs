//! Dice notation parsing ("1d20+5", "2d6-1", "d8")

use super::{RollError, RollSpecification};
use crate::types::DieType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Empty dice notation")]
    Empty,
    #[error("Invalid dice notation: {0}")]
    InvalidFormat(String),
    #[error(transparent)]
    Roll(#[from] RollError),
}

/// Parse standard dice notation into a normal-mode specification
///
/// Accepted forms: `XdY`, `dY` (one die), `XdY+Z`, `XdY-Z`. Case and
/// surrounding whitespace are ignored. `Y` must be a supported die.
pub fn parse_notation(input: &str) -> Result<RollSpecification, NotationError> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Err(NotationError::Empty);
    }

    let (count_str, rest) = input
        .split_once('d')
        .ok_or_else(|| NotationError::InvalidFormat(format!("missing 'd' in '{}'", input)))?;

    let count: u32 = if count_str.is_empty() {
        1
    } else {
        count_str
            .parse()
            .map_err(|_| NotationError::InvalidFormat(format!("bad dice count '{}'", count_str)))?
    };

    let (faces_str, modifier) = match rest.find(|c: char| c == '+' || c == '-') {
        Some(pos) => {
            let (faces, signed) = rest.split_at(pos);
            let modifier: i32 = signed
                .parse()
                .map_err(|_| NotationError::InvalidFormat(format!("bad modifier '{}'", signed)))?;
            (faces, modifier)
        }
        None => (rest, 0),
    };

    let faces: u32 = faces_str
        .parse()
        .map_err(|_| NotationError::InvalidFormat(format!("bad die size '{}'", faces_str)))?;

    let die = DieType::try_from(faces)?;
    Ok(RollSpecification::new(die, count, modifier)?)
}
