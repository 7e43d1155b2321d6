use super::derived::Capacity;
use super::matcher::MatchMode;
use super::taxonomy::Taxonomy;
use crate::types::evaluation::{DerivedScores, RecommendedTechStack};

pub const ADD_DEPTH: &str = "The project looks quite simple. Consider adding an analytics dashboard, performance evaluation, or an AI/ML component to increase depth.";
pub const STRENGTHEN: &str = "Difficulty is reasonable. You can strengthen the project by clearly defining evaluation metrics and including a small performance or usability study.";
pub const REDUCE_SCOPE: &str = "The project is very challenging. Consider removing one advanced component (e.g., deep learning, blockchain, or real-time streaming) and focusing on a core subset.";
pub const MISSING_DATASET: &str = "You mention ML/AI but not the dataset. Clarify the source, size, and labeling of your data to make the project more concrete.";
pub const JUSTIFY_BLOCKCHAIN: &str =
    "Explain why blockchain is needed instead of a normal database to strengthen the justification.";
pub const PLANNING_REMINDER: &str = "Prepare a clear problem statement, objectives, and a Gantt chart. Supervisors usually care a lot about planning and clarity, not just technology.";

pub struct SuggestionContext<'a> {
    pub text: &'a str,
    pub derived: &'a DerivedScores,
    pub stack: &'a RecommendedTechStack,
    pub capacity: Capacity,
}

/// Rules run in a fixed order and only ever append; the planning reminder always closes the list.
pub fn build_suggestions(
    context: &SuggestionContext<'_>,
    taxonomy: &Taxonomy,
    mode: MatchMode,
) -> Vec<String> {
    let difficulty = context.derived.difficulty;
    let triggers = &taxonomy.suggestion;
    let mut suggestions = Vec::new();

    if difficulty < 3.0 {
        suggestions.push(ADD_DEPTH.to_string());
    }
    if (3.0..6.0).contains(&difficulty) {
        suggestions.push(STRENGTHEN.to_string());
    }
    if difficulty > 8.0 {
        suggestions.push(REDUCE_SCOPE.to_string());
    }
    if context.derived.feasibility < 5.0 {
        suggestions.push(prototype_first(context.capacity));
    }
    if context.stack.ml_stack.is_some() && !mode.found(context.text, triggers.dataset) {
        suggestions.push(MISSING_DATASET.to_string());
    }
    if context.stack.blockchain.is_some()
        && !mode.found(context.text, triggers.blockchain_rationale)
    {
        suggestions.push(JUSTIFY_BLOCKCHAIN.to_string());
    }

    suggestions.push(PLANNING_REMINDER.to_string());
    suggestions
}

fn prototype_first(capacity: Capacity) -> String {
    format!(
        "For a team of {} over {:.1} months, this scope is risky. Start with a minimal prototype (Phase 1) and only add advanced features if time permits.",
        capacity.team_size, capacity.months
    )
}
