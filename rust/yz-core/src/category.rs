//! Score categories in score-card order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NUM_CATS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCategoryError {
    #[error("unknown score category: {name:?}")]
    Unknown { name: String },
}

/// One scoring rule of the Yatzy score card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Pair,
    TwoPairs,
    ThreeOfAKind,
    FourOfAKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Chance,
    Yatzy,
}

impl ScoreCategory {
    /// All categories in index order (0..14).
    pub const ALL: [ScoreCategory; NUM_CATS] = [
        ScoreCategory::Ones,
        ScoreCategory::Twos,
        ScoreCategory::Threes,
        ScoreCategory::Fours,
        ScoreCategory::Fives,
        ScoreCategory::Sixes,
        ScoreCategory::Pair,
        ScoreCategory::TwoPairs,
        ScoreCategory::ThreeOfAKind,
        ScoreCategory::FourOfAKind,
        ScoreCategory::SmallStraight,
        ScoreCategory::LargeStraight,
        ScoreCategory::FullHouse,
        ScoreCategory::Chance,
        ScoreCategory::Yatzy,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<ScoreCategory> {
        Self::ALL.get(idx).copied()
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            ScoreCategory::Ones => "ones",
            ScoreCategory::Twos => "twos",
            ScoreCategory::Threes => "threes",
            ScoreCategory::Fours => "fours",
            ScoreCategory::Fives => "fives",
            ScoreCategory::Sixes => "sixes",
            ScoreCategory::Pair => "pair",
            ScoreCategory::TwoPairs => "two_pairs",
            ScoreCategory::ThreeOfAKind => "three_of_a_kind",
            ScoreCategory::FourOfAKind => "four_of_a_kind",
            ScoreCategory::SmallStraight => "small_straight",
            ScoreCategory::LargeStraight => "large_straight",
            ScoreCategory::FullHouse => "full_house",
            ScoreCategory::Chance => "chance",
            ScoreCategory::Yatzy => "yatzy",
        }
    }

    /// Face value counted by the upper-section categories.
    pub fn face(self) -> Option<u8> {
        match self {
            ScoreCategory::Ones => Some(1),
            ScoreCategory::Twos => Some(2),
            ScoreCategory::Threes => Some(3),
            ScoreCategory::Fours => Some(4),
            ScoreCategory::Fives => Some(5),
            ScoreCategory::Sixes => Some(6),
            _ => None,
        }
    }
}

/// Lowercase and drop `_`, `-` and whitespace so `TWO_PAIRS`, `two-pairs` and `TwoPairs` compare equal.
fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ScoreCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_name(s);
        ScoreCategory::ALL
            .iter()
            .copied()
            .find(|c| fold_name(c.name()) == wanted)
            .ok_or_else(|| ParseCategoryError::Unknown {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
