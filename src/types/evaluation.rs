use serde::Serialize;

pub type Score = f64;

/// The five independent dimensions every proposal is scored on, each in `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScores {
    pub technical_breadth: Score,
    pub technical_depth: Score,
    pub nonfunctional_complexity: Score,
    pub data_complexity: Score,
    pub integration_complexity: Score,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedScores {
    pub difficulty: Score,
    pub feasibility: Score,
    pub novelty: Score,
    pub marks_potential: Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub difficulty: &'static str,
    pub feasibility: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedTechStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub ml_stack: Option<Vec<String>>,
    pub blockchain: Option<Vec<String>>,
    pub devops: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub difficulty_score: Score,
    pub feasibility_score: Score,
    pub marks_potential: Score,
    pub difficulty_label: String,
    pub feasibility_label: String,
    pub novel_idea_score: Score,
    pub recommended_tech_stack: RecommendedTechStack,
    pub suggestions: Vec<String>,
    pub raw_dimension_scores: DimensionScores,
}

/// Rounds the stored binary value, not a scaled copy of it, so 74.05
/// (held as 74.0499..) becomes 74.0.
pub fn round_to(value: Score, decimals: usize) -> Score {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
