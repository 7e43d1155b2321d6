use crate::types::evaluation::EvaluationResult;

pub fn to_json(result: &EvaluationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
