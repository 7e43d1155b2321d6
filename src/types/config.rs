use crate::engine::matcher::MatchMode;
use crate::error::ScopeError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeConfig {
    pub matching: Option<MatchingConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub mode: MatchMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

impl ScopeConfig {
    pub fn match_mode(&self) -> MatchMode {
        self.matching
            .as_ref()
            .map(|matching| matching.mode)
            .unwrap_or_default()
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn validate(&self) -> Result<(), ScopeError> {
        if let Some(format) = self.report_format() {
            if !matches!(format, "json" | "md") {
                return Err(ScopeError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }
        Ok(())
    }
}
