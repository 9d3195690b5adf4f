//! Validated five-dice rolls.
//!
//! A `DiceRoll` always holds exactly five face values in `FACE_MIN..=FACE_MAX`.
//! Arity is fixed by the `[u8; 5]` input; range is checked at construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NUM_DICE: usize = 5;
pub const FACE_MIN: u8 = 1;
pub const FACE_MAX: u8 = 6;

/// Raised when a roll contains a face value outside `FACE_MIN..=FACE_MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "Wrong dice values: a dice roll must be composed of values between {min} and {max} included (got {value})",
        min = FACE_MIN,
        max = FACE_MAX
    )]
    FaceOutOfRange { value: u8 },
}

/// Errors from parsing a textual roll such as `"1, 2, 3, 4, 5"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRollError {
    #[error("expected {expected} dice, found {found}", expected = NUM_DICE)]
    WrongCount { found: usize },
    #[error("invalid character {ch:?} in dice roll")]
    InvalidChar { ch: char },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Number of dice showing each face.
///
/// Index 0 is unused so that `counts[face]` reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts([u8; FACE_MAX as usize + 1]);

impl Counts {
    /// Count for `face`; faces outside 1..=6 read as 0.
    pub fn get(&self, face: u8) -> u8 {
        if (FACE_MIN..=FACE_MAX).contains(&face) {
            self.0[face as usize]
        } else {
            0
        }
    }

    /// `(face, count)` pairs from the highest face down to the lowest.
    pub fn iter_desc(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (FACE_MIN..=FACE_MAX).rev().map(move |f| (f, self.0[f as usize]))
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| c as u32).sum()
    }
}

/// An immutable roll of five dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 5]", into = "[u8; 5]")]
pub struct DiceRoll {
    values: [u8; NUM_DICE],
}

impl DiceRoll {
    /// Validate and build a roll. Order is kept as given.
    pub fn new(values: [u8; NUM_DICE]) -> Result<Self, ValidationError> {
        if let Some(&value) = values.iter().find(|v| !(FACE_MIN..=FACE_MAX).contains(*v)) {
            tracing::warn!(?values, value, "rejected dice roll");
            return Err(ValidationError::FaceOutOfRange { value });
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> [u8; NUM_DICE] {
        self.values
    }

    /// The dice sorted ascending.
    pub fn sorted(&self) -> [u8; NUM_DICE] {
        let mut s = self.values;
        s.sort_unstable();
        s
    }

    pub fn sum(&self) -> u32 {
        self.values.iter().map(|&d| d as u32).sum()
    }

    /// Occurrence table by face value. Always sums to `NUM_DICE`.
    pub fn occurrence_counts(&self) -> Counts {
        let mut counts = [0u8; FACE_MAX as usize + 1];
        for &d in &self.values {
            counts[d as usize] += 1;
        }
        Counts(counts)
    }

    /// True iff all five dice show the same face.
    pub fn is_single_value(&self) -> bool {
        self.values.iter().all(|&d| d == self.values[0])
    }
}

impl TryFrom<[u8; NUM_DICE]> for DiceRoll {
    type Error = ValidationError;

    fn try_from(values: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        DiceRoll::new(values)
    }
}

impl From<DiceRoll> for [u8; NUM_DICE] {
    fn from(roll: DiceRoll) -> Self {
        roll.values
    }
}

impl FromStr for DiceRoll {
    type Err = ParseRollError;

    /// Parse digits separated by commas and/or whitespace (`"1, 2, 3, 4, 5"`, `"12345"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0u8; NUM_DICE];
        let mut found = 0usize;
        for ch in s.chars().filter(|c| *c != ',' && !c.is_whitespace()) {
            let digit = ch.to_digit(10).ok_or(ParseRollError::InvalidChar { ch })?;
            if found < NUM_DICE {
                values[found] = digit as u8;
            }
            found += 1;
        }
        if found != NUM_DICE {
            return Err(ParseRollError::WrongCount { found });
        }
        Ok(DiceRoll::new(values)?)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.values;
        write!(f, "{a}, {b}, {c}, {d}, {e}")
    }
}
