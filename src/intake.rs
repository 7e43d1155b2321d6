use crate::error::{Result, ScopeError};
use crate::types::proposal::ProposalInput;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub const STDIN_MARKER: &str = "-";

/// Reads and validates a proposal. The engine assumes this already happened.
pub fn load_proposal(path: &Path) -> Result<ProposalInput> {
    let proposal = if path.as_os_str() == STDIN_MARKER {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        parse_json(&content, "<stdin>")?
    } else {
        read_proposal_file(path)?
    };

    proposal.validate()?;
    info!(title = %proposal.title, "proposal accepted");
    Ok(proposal)
}

fn read_proposal_file(path: &Path) -> Result<ProposalInput> {
    if !path.is_file() {
        return Err(ScopeError::ProposalNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let content = std::fs::read_to_string(path)?;
    let source = path.display().to_string();

    match extension.as_str() {
        "json" => parse_json(&content, &source),
        "toml" => toml::from_str(&content)
            .map_err(|e| ScopeError::ProposalParse(format!("{source}: {e}"))),
        _ => Err(ScopeError::UnsupportedFormat(source)),
    }
}

fn parse_json(content: &str, source: &str) -> Result<ProposalInput> {
    serde_json::from_str(content).map_err(|e| ScopeError::ProposalParse(format!("{source}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TODO_JSON: &str = r#"{
        "title": "Simple Todo App",
        "description": "A basic to-do list web application with React frontend",
        "degree_level": "BSc",
        "course_type": "FYP",
        "team_size": 3,
        "duration_weeks": 12,
        "tech_tags": []
    }"#;

    #[test]
    fn load_proposal_reads_json_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("todo.json");
        fs::write(&path, TODO_JSON).expect("proposal should write");

        let proposal = load_proposal(&path).expect("proposal should load");
        assert_eq!(proposal.title, "Simple Todo App");
    }

    #[test]
    fn load_proposal_reads_toml_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("iot.TOML");
        fs::write(
            &path,
            r#"
title = "Smart IoT Dashboard"
description = "A real-time IoT sensor dashboard using Kafka streaming"
degree_level = "Diploma"
course_type = "Assignment"
team_size = 1
duration_weeks = 8
"#,
        )
        .expect("proposal should write");

        let proposal = load_proposal(&path).expect("proposal should load");
        assert_eq!(proposal.team_size, 1);
    }

    #[test]
    fn load_proposal_rejects_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_proposal(&dir.path().join("absent.json")).expect_err("missing should fail");
        assert!(matches!(err, ScopeError::ProposalNotFound(_)));
    }

    #[test]
    fn load_proposal_rejects_unknown_extension() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("proposal.yaml");
        fs::write(&path, "title: nope").expect("proposal should write");

        let err = load_proposal(&path).expect_err("yaml should fail");
        assert!(matches!(err, ScopeError::UnsupportedFormat(_)));
    }

    #[test]
    fn load_proposal_validates_ranges() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("big-team.json");
        fs::write(&path, TODO_JSON.replace("\"team_size\": 3", "\"team_size\": 12"))
            .expect("proposal should write");

        let err = load_proposal(&path).expect_err("team of 12 should fail");
        assert!(matches!(err, ScopeError::InvalidProposal(_)));
    }

    #[test]
    fn load_proposal_reports_parse_errors() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"title\": ").expect("proposal should write");

        let err = load_proposal(&path).expect_err("broken json should fail");
        assert!(matches!(err, ScopeError::ProposalParse(_)));
    }
}
