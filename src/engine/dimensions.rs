use super::matcher::MatchMode;
use super::taxonomy::{Taxonomy, WeightedGroup};
use crate::types::evaluation::{DimensionScores, Score};

const DIMENSION_MAX: Score = 10.0;
const BASELINE_DEPTH: Score = 2.0;

pub fn score_dimensions(text: &str, taxonomy: &Taxonomy, mode: MatchMode) -> DimensionScores {
    let technical_breadth = technical_breadth(text, taxonomy, mode);

    let mut technical_depth = weighted_sum(text, taxonomy.depth, mode);
    if technical_breadth > 0.0 && technical_depth == 0.0 {
        technical_depth = BASELINE_DEPTH;
    }

    DimensionScores {
        technical_breadth,
        technical_depth: technical_depth.clamp(0.0, DIMENSION_MAX),
        nonfunctional_complexity: weighted_sum(text, taxonomy.nonfunctional, mode)
            .clamp(0.0, DIMENSION_MAX),
        data_complexity: weighted_sum(text, taxonomy.data, mode).clamp(0.0, DIMENSION_MAX),
        integration_complexity: weighted_sum(text, taxonomy.integration, mode)
            .clamp(0.0, DIMENSION_MAX),
    }
}

fn technical_breadth(text: &str, taxonomy: &Taxonomy, mode: MatchMode) -> Score {
    let hits = mode.count_group_matches(text, &taxonomy.domain_phrases());
    (hits as Score).clamp(0.0, DIMENSION_MAX)
}

/// Sum of the weights of every group with a hit; each group is checked once.
pub(crate) fn weighted_sum(text: &str, groups: &[WeightedGroup], mode: MatchMode) -> Score {
    groups
        .iter()
        .filter(|group| mode.found(text, group.phrases))
        .map(|group| group.weight)
        .sum()
}
