//! Proposal scoring pipeline.
//!
//! normalize -> dimensions -> derived scores -> labels -> stack -> suggestions.
//! Every step is a pure function over request-local data plus the shared
//! read-only [`taxonomy::Taxonomy`], so evaluations can run concurrently.

pub mod derived;
pub mod dimensions;
pub mod labels;
pub mod matcher;
pub mod normalize;
pub mod stack;
pub mod suggestions;
pub mod taxonomy;

use crate::types::evaluation::{round_to, EvaluationResult};
use crate::types::proposal::ProposalInput;
use derived::Capacity;
use matcher::MatchMode;
use suggestions::SuggestionContext;
use taxonomy::Taxonomy;
use tracing::debug;

/// Scores a proposal that already passed boundary validation.
pub fn evaluate(proposal: &ProposalInput, mode: MatchMode) -> EvaluationResult {
    let taxonomy = Taxonomy::builtin();
    let text = normalize::normalize_text(proposal);
    let capacity = Capacity {
        team_size: proposal.team_size,
        months: proposal.months(),
    };

    let dimensions = dimensions::score_dimensions(&text, taxonomy, mode);
    debug!(?dimensions, ?mode, "dimension scores");

    let derived = derived::derive_scores(&dimensions, capacity, &text, taxonomy, mode);
    debug!(?derived, "derived scores");

    let labels = labels::classify(&derived);
    let stack = stack::recommend_stack(&text, taxonomy, mode);
    let suggestions = suggestions::build_suggestions(
        &SuggestionContext {
            text: &text,
            derived: &derived,
            stack: &stack,
            capacity,
        },
        taxonomy,
        mode,
    );

    EvaluationResult {
        difficulty_score: round_to(derived.difficulty, 2),
        feasibility_score: round_to(derived.feasibility, 2),
        marks_potential: round_to(derived.marks_potential, 1),
        difficulty_label: labels.difficulty.to_string(),
        feasibility_label: labels.feasibility.to_string(),
        novel_idea_score: round_to(derived.novelty, 2),
        recommended_tech_stack: stack,
        suggestions,
        raw_dimension_scores: dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::proposal::{sample_proposal, CourseType, DegreeLevel};

    fn iot_dashboard() -> ProposalInput {
        ProposalInput {
            title: "Smart IoT Dashboard".to_string(),
            description:
                "A real-time IoT sensor dashboard using Kafka streaming for smart city monitoring"
                    .to_string(),
            degree_level: DegreeLevel::BSc,
            course_type: CourseType::Fyp,
            team_size: 1,
            duration_weeks: 8,
            tech_tags: vec!["iot".to_string(), "kafka".to_string()],
        }
    }

    fn heavy_solo() -> ProposalInput {
        let mut proposal = sample_proposal(
            "Federated Vision Ledger",
            "Deep learning computer vision on real-time kafka video with an ethereum blockchain, \
             genetic algorithm optimization, big data time series, stripe payment and arduino sensors \
             behind an android app and a web dashboard with encryption",
        );
        proposal.team_size = 1;
        proposal.duration_weeks = 8;
        proposal
    }

    #[test]
    fn iot_dashboard_scenario() {
        let result = evaluate(&iot_dashboard(), MatchMode::Substring);
        let dims = result.raw_dimension_scores;
        assert_eq!(dims.technical_breadth, 3.0);
        assert_eq!(dims.technical_depth, 3.0);
        assert_eq!(dims.nonfunctional_complexity, 3.0);
        assert_eq!(dims.data_complexity, 0.0);
        assert_eq!(dims.integration_complexity, 2.0);

        assert_eq!(result.difficulty_score, 2.4);
        assert_eq!(result.difficulty_label, labels::TOO_EASY);
        assert_eq!(result.feasibility_score, 10.0);
        assert_eq!(result.feasibility_label, labels::GOOD_FEASIBILITY);
        assert_eq!(result.novel_idea_score, 6.0);
        assert_eq!(result.marks_potential, 69.1);
        assert_eq!(
            result.recommended_tech_stack.backend,
            vec![stack::STREAMING_BACKEND.to_string()]
        );
        assert_eq!(
            result.recommended_tech_stack.frontend,
            vec![stack::REACT.to_string()]
        );
    }

    #[test]
    fn simple_todo_scenario() {
        let proposal = sample_proposal(
            "Simple Todo App",
            "A basic to-do list web application with React frontend",
        );
        let result = evaluate(&proposal, MatchMode::Substring);
        assert_eq!(result.raw_dimension_scores.technical_breadth, 1.0);
        assert_eq!(result.raw_dimension_scores.technical_depth, 2.0);
        assert!(result.difficulty_score < 3.0);
        assert_eq!(result.difficulty_label, labels::TOO_EASY);
        assert!(result.recommended_tech_stack.ml_stack.is_none());
        assert!(result.recommended_tech_stack.blockchain.is_none());
        assert_eq!(
            result.recommended_tech_stack.frontend,
            vec![stack::REACT.to_string()]
        );
        assert_eq!(result.suggestions[0], suggestions::ADD_DEPTH);
    }

    #[test]
    fn unjustified_blockchain_scenario() {
        let proposal = sample_proposal(
            "Campus Voting",
            "Students vote through a blockchain with a smart contract tallying ballots",
        );
        let result = evaluate(&proposal, MatchMode::Substring);
        assert!(result.recommended_tech_stack.blockchain.is_some());
        assert!(result
            .suggestions
            .contains(&suggestions::JUSTIFY_BLOCKCHAIN.to_string()));
    }

    #[test]
    fn heavy_solo_project_is_high_risk() {
        let result = evaluate(&heavy_solo(), MatchMode::Substring);
        assert_eq!(result.difficulty_label, labels::HIGH_RISK);
        assert_eq!(result.feasibility_score, 0.0);
        assert_eq!(result.feasibility_label, labels::LOW_FEASIBILITY);
        assert!(result.suggestions.contains(&suggestions::REDUCE_SCOPE.to_string()));
        assert!(result
            .suggestions
            .iter()
            .any(|suggestion| suggestion.starts_with("For a team of 1 over 2.0 months")));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let proposal = heavy_solo();
        let first = evaluate(&proposal, MatchMode::Substring);
        let second = evaluate(&proposal, MatchMode::Substring);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("first should serialize"),
            serde_json::to_string(&second).expect("second should serialize")
        );
    }

    #[test]
    fn scores_stay_in_range_and_reminder_is_last() {
        let mut proposals = vec![iot_dashboard(), heavy_solo()];
        for team_size in [1, 2, 5, 10] {
            for duration_weeks in [1, 6, 11, 16, 52] {
                let mut proposal = heavy_solo();
                proposal.team_size = team_size;
                proposal.duration_weeks = duration_weeks;
                proposals.push(proposal);
            }
        }
        proposals.push(sample_proposal("Blank", "nothing to match at all"));

        for proposal in &proposals {
            let result = evaluate(proposal, MatchMode::Substring);
            let dims = result.raw_dimension_scores;
            for value in [
                dims.technical_breadth,
                dims.technical_depth,
                dims.nonfunctional_complexity,
                dims.data_complexity,
                dims.integration_complexity,
                result.difficulty_score,
                result.feasibility_score,
                result.novel_idea_score,
            ] {
                assert!((0.0..=10.0).contains(&value));
            }
            assert!((0.0..=100.0).contains(&result.marks_potential));
            assert_eq!(
                result.suggestions.last().map(String::as_str),
                Some(suggestions::PLANNING_REMINDER)
            );
        }
    }

    #[test]
    fn no_ml_vocabulary_means_no_ml_stack() {
        let proposal = sample_proposal("Library Loans", "Track book loans for a school library");
        let result = evaluate(&proposal, MatchMode::Substring);
        assert!(result.recommended_tech_stack.ml_stack.is_none());
    }

    #[test]
    fn word_boundary_mode_ignores_html() {
        let proposal = sample_proposal("Static Site", "Hand written html pages for a club");
        let substring = evaluate(&proposal, MatchMode::Substring);
        assert!(substring.recommended_tech_stack.ml_stack.is_some());

        let bounded = evaluate(&proposal, MatchMode::WordBoundary);
        assert!(bounded.recommended_tech_stack.ml_stack.is_none());
    }
}
