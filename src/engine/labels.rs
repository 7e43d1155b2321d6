use crate::types::evaluation::{DerivedScores, Labels, Score};

pub const TOO_EASY: &str = "Too Easy";
pub const REASONABLE: &str = "Reasonable";
pub const CHALLENGING: &str = "Challenging but Feasible";
pub const HIGH_RISK: &str = "Very Challenging / High Risk";

pub const LOW_FEASIBILITY: &str = "Low Feasibility (Unrealistic as described)";
pub const MODERATE_FEASIBILITY: &str = "Moderate Feasibility (Scope / risk needs control)";
pub const GOOD_FEASIBILITY: &str = "Good Feasibility";

pub fn classify(derived: &DerivedScores) -> Labels {
    Labels {
        difficulty: difficulty_label(derived.difficulty),
        feasibility: feasibility_label(derived.feasibility),
    }
}

/// A score sitting exactly on a threshold belongs to the higher bucket.
pub fn difficulty_label(difficulty: Score) -> &'static str {
    if difficulty < 3.0 {
        TOO_EASY
    } else if difficulty < 6.0 {
        REASONABLE
    } else if difficulty < 8.0 {
        CHALLENGING
    } else {
        HIGH_RISK
    }
}

pub fn feasibility_label(feasibility: Score) -> &'static str {
    if feasibility < 3.0 {
        LOW_FEASIBILITY
    } else if feasibility < 6.0 {
        MODERATE_FEASIBILITY
    } else {
        GOOD_FEASIBILITY
    }
}
