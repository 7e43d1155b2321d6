use crate::error::ScopeError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const TITLE_CHARS: RangeInclusive<usize> = 3..=200;
pub const DESCRIPTION_CHARS: RangeInclusive<usize> = 10..=5000;
pub const TEAM_SIZE: RangeInclusive<u32> = 1..=10;
pub const DURATION_WEEKS: RangeInclusive<u32> = 1..=52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeLevel {
    Diploma,
    BSc,
    MSc,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    #[serde(rename = "FYP")]
    Fyp,
    MiniProject,
    Assignment,
    Other,
}

/// A single project proposal as submitted for evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalInput {
    pub title: String,
    pub description: String,
    pub degree_level: DegreeLevel,
    pub course_type: CourseType,
    pub team_size: u32,
    pub duration_weeks: u32,
    #[serde(default)]
    pub tech_tags: Vec<String>,
}

impl ProposalInput {
    pub fn months(&self) -> f64 {
        f64::from(self.duration_weeks) / 4.0
    }

    /// Boundary checks applied before a proposal reaches the engine.
    pub fn validate(&self) -> Result<(), ScopeError> {
        let title_len = self.title.chars().count();
        if !TITLE_CHARS.contains(&title_len) {
            return Err(ScopeError::InvalidProposal(format!(
                "title must be between {} and {} characters (found {})",
                TITLE_CHARS.start(),
                TITLE_CHARS.end(),
                title_len
            )));
        }

        let description_len = self.description.chars().count();
        if !DESCRIPTION_CHARS.contains(&description_len) {
            return Err(ScopeError::InvalidProposal(format!(
                "description must be between {} and {} characters (found {})",
                DESCRIPTION_CHARS.start(),
                DESCRIPTION_CHARS.end(),
                description_len
            )));
        }

        if !TEAM_SIZE.contains(&self.team_size) {
            return Err(ScopeError::InvalidProposal(format!(
                "team_size must be between {} and {} (found {})",
                TEAM_SIZE.start(),
                TEAM_SIZE.end(),
                self.team_size
            )));
        }

        if !DURATION_WEEKS.contains(&self.duration_weeks) {
            return Err(ScopeError::InvalidProposal(format!(
                "duration_weeks must be between {} and {} (found {})",
                DURATION_WEEKS.start(),
                DURATION_WEEKS.end(),
                self.duration_weeks
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_proposal(title: &str, description: &str) -> ProposalInput {
    ProposalInput {
        title: title.to_string(),
        description: description.to_string(),
        degree_level: DegreeLevel::BSc,
        course_type: CourseType::Fyp,
        team_size: 3,
        duration_weeks: 12,
        tech_tags: Vec::new(),
    }
}
