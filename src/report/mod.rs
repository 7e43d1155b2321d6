pub mod json;
pub mod md;

use crate::error::{Result, ScopeError};
use crate::types::evaluation::EvaluationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "json" => Ok(Self::Json),
            "md" => Ok(Self::Md),
            other => Err(ScopeError::ConfigParse(format!(
                "unsupported report.format: {other}"
            ))),
        }
    }
}

pub fn render(result: &EvaluationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(ScopeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}
