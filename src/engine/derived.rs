use super::dimensions::weighted_sum;
use super::matcher::MatchMode;
use super::taxonomy::Taxonomy;
use crate::types::evaluation::{DerivedScores, DimensionScores, Score};

const NOVELTY_BASELINE: Score = 5.0;
const MARKS_BASELINE: Score = 40.0;

/// Team and schedule figures the feasibility penalties depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacity {
    pub team_size: u32,
    pub months: f64,
}

pub fn derive_scores(
    dimensions: &DimensionScores,
    capacity: Capacity,
    text: &str,
    taxonomy: &Taxonomy,
    mode: MatchMode,
) -> DerivedScores {
    let difficulty = difficulty(dimensions);
    let feasibility = feasibility(difficulty, capacity);
    let novelty = novelty(text, taxonomy, mode);
    DerivedScores {
        difficulty,
        feasibility,
        novelty,
        marks_potential: marks_potential(difficulty, novelty, feasibility),
    }
}

pub fn difficulty(dimensions: &DimensionScores) -> Score {
    (0.35 * dimensions.technical_breadth
        + 0.35 * dimensions.technical_depth
        + 0.15 * dimensions.integration_complexity
        + 0.15 * dimensions.data_complexity)
        .clamp(0.0, 10.0)
}

pub fn feasibility(difficulty: Score, capacity: Capacity) -> Score {
    let mut score = 10.0 - (difficulty - 4.0).max(0.0) * 1.2;

    // Penalties stack; a single project can hit all four.
    if difficulty > 7.0 && capacity.team_size <= 2 {
        score -= 2.0;
    }
    if difficulty > 8.0 && capacity.team_size == 1 {
        score -= 2.0;
    }
    if difficulty > 7.0 && capacity.months < 4.0 {
        score -= 2.0;
    }
    if difficulty > 6.0 && capacity.months < 3.0 {
        score -= 1.5;
    }

    score.clamp(0.0, 10.0)
}

pub fn novelty(text: &str, taxonomy: &Taxonomy, mode: MatchMode) -> Score {
    (NOVELTY_BASELINE + weighted_sum(text, taxonomy.novelty, mode)).clamp(0.0, 10.0)
}

pub fn marks_potential(difficulty: Score, novelty: Score, feasibility: Score) -> Score {
    (MARKS_BASELINE + 4.0 * difficulty + 2.0 * novelty + 1.5 * (feasibility - 5.0))
        .clamp(0.0, 100.0)
}
