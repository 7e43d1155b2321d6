use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("proposal file not found: {0}")]
    ProposalNotFound(String),

    #[error("proposal parse error: {0}")]
    ProposalParse(String),

    #[error("invalid proposal: {0}")]
    InvalidProposal(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unsupported proposal format: {0}")]
    UnsupportedFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScopeError>;
