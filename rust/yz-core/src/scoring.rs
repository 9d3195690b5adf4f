//! Per-category scoring of a single roll.
//!
//! Every function here is pure: the same roll and category always give the same score.

use crate::category::{ScoreCategory, NUM_CATS};
use crate::config::ScoringConfig;
use crate::dice::{Counts, DiceRoll};

const SMALL_STRAIGHT: [u8; 5] = [1, 2, 3, 4, 5];
const LARGE_STRAIGHT: [u8; 5] = [2, 3, 4, 5, 6];

/// Score `roll` in `category` under the standard ruleset.
pub fn score(category: ScoreCategory, roll: &DiceRoll) -> u32 {
    score_with(category, roll, &ScoringConfig::default())
}

/// Score `roll` in `category`, taking fixed rewards from `rules`.
pub fn score_with(category: ScoreCategory, roll: &DiceRoll, rules: &ScoringConfig) -> u32 {
    let counts = roll.occurrence_counts();
    match category {
        ScoreCategory::Ones => face_score(&counts, 1),
        ScoreCategory::Twos => face_score(&counts, 2),
        ScoreCategory::Threes => face_score(&counts, 3),
        ScoreCategory::Fours => face_score(&counts, 4),
        ScoreCategory::Fives => face_score(&counts, 5),
        ScoreCategory::Sixes => face_score(&counts, 6),
        ScoreCategory::Pair => match_score(&counts, 2, 1),
        ScoreCategory::TwoPairs => match_score(&counts, 2, 2),
        ScoreCategory::ThreeOfAKind => match_score(&counts, 3, 1),
        ScoreCategory::FourOfAKind => match_score(&counts, 4, 1),
        ScoreCategory::SmallStraight => {
            if roll.sorted() == SMALL_STRAIGHT {
                rules.small_straight
            } else {
                0
            }
        }
        ScoreCategory::LargeStraight => {
            if roll.sorted() == LARGE_STRAIGHT {
                rules.large_straight
            } else {
                0
            }
        }
        ScoreCategory::FullHouse => full_house(roll, &counts),
        ScoreCategory::Chance => roll.sum(),
        ScoreCategory::Yatzy => {
            if roll.is_single_value() {
                rules.yatzy
            } else {
                0
            }
        }
    }
}

/// Scores for every category, in `ScoreCategory::ALL` order.
pub fn scores_for_roll(roll: &DiceRoll) -> [u32; NUM_CATS] {
    scores_for_roll_with(roll, &ScoringConfig::default())
}

pub fn scores_for_roll_with(roll: &DiceRoll, rules: &ScoringConfig) -> [u32; NUM_CATS] {
    let mut s = [0u32; NUM_CATS];
    for cat in ScoreCategory::ALL {
        s[cat.index()] = score_with(cat, roll, rules);
    }
    s
}

/// Highest-scoring category for `roll`. Ties go to the earlier category.
pub fn best_category(roll: &DiceRoll) -> (ScoreCategory, u32) {
    best_category_with(roll, &ScoringConfig::default())
}

pub fn best_category_with(roll: &DiceRoll, rules: &ScoringConfig) -> (ScoreCategory, u32) {
    let scores = scores_for_roll_with(roll, rules);
    let mut best = (ScoreCategory::ALL[0], scores[0]);
    for cat in ScoreCategory::ALL.into_iter().skip(1) {
        if scores[cat.index()] > best.1 {
            best = (cat, scores[cat.index()]);
        }
    }
    best
}

fn face_score(counts: &Counts, face: u8) -> u32 {
    face as u32 * counts.get(face) as u32
}

/// Greedy match over faces, highest first.
///
/// A face with at least `min_occurrences` dice is one match and contributes
/// `face * min(count, min_occurrences)`. Scanning stops after `required_matches`
/// matches; fewer matches than required scores 0.
pub fn match_score(counts: &Counts, min_occurrences: u8, required_matches: usize) -> u32 {
    let mut score = 0u32;
    let mut matches = 0usize;
    for (face, count) in counts.iter_desc() {
        if count >= min_occurrences {
            matches += 1;
            score += face as u32 * count.min(min_occurrences) as u32;
            if matches >= required_matches {
                break;
            }
        }
    }
    if matches == required_matches {
        score
    } else {
        0
    }
}

/// Best triple plus best pair, 0 unless both are present.
///
/// Both terms scan the full roll, so a face with three or more dice can supply
/// the pair as well. Five of a kind is not a full house.
fn full_house(roll: &DiceRoll, counts: &Counts) -> u32 {
    if roll.is_single_value() {
        return 0;
    }
    let triple = match_score(counts, 3, 1);
    let pair = match_score(counts, 2, 1);
    if triple == 0 || pair == 0 {
        return 0;
    }
    triple + pair
}
