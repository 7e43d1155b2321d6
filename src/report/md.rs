use crate::types::evaluation::EvaluationResult;

pub fn to_markdown(result: &EvaluationResult) -> String {
    let mut output = String::new();
    output.push_str("# Proposal Evaluation\n\n");
    output.push_str(&format!(
        "- difficulty: {:.2} ({})\n- feasibility: {:.2} ({})\n- novelty: {:.2}\n- marks potential: {:.1}/100\n\n",
        result.difficulty_score,
        result.difficulty_label,
        result.feasibility_score,
        result.feasibility_label,
        result.novel_idea_score,
        result.marks_potential
    ));

    let dims = &result.raw_dimension_scores;
    output.push_str("## Dimension Scores\n\n");
    output.push_str(&format!(
        "- technical_breadth: {:.2}\n- technical_depth: {:.2}\n- nonfunctional_complexity: {:.2}\n- data_complexity: {:.2}\n- integration_complexity: {:.2}\n\n",
        dims.technical_breadth,
        dims.technical_depth,
        dims.nonfunctional_complexity,
        dims.data_complexity,
        dims.integration_complexity
    ));

    let stack = &result.recommended_tech_stack;
    output.push_str("## Recommended Tech Stack\n\n");
    for (layer, entries) in [
        ("frontend", Some(&stack.frontend)),
        ("backend", Some(&stack.backend)),
        ("database", Some(&stack.database)),
        ("ml", stack.ml_stack.as_ref()),
        ("blockchain", stack.blockchain.as_ref()),
        ("devops", stack.devops.as_ref()),
    ] {
        match entries {
            Some(entries) => output.push_str(&format!("- {layer}: {}\n", entries.join(", "))),
            None => output.push_str(&format!("- {layer}: none\n")),
        }
    }
    output.push('\n');

    output.push_str("## Suggestions\n\n");
    for (index, suggestion) in result.suggestions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, suggestion));
    }

    output
}
