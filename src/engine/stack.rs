use super::matcher::MatchMode;
use super::taxonomy::Taxonomy;
use crate::types::evaluation::RecommendedTechStack;

pub const REACT: &str = "React";
pub const CROSS_PLATFORM_MOBILE: &str = "React Native / Flutter";
pub const STREAMING_BACKEND: &str = "FastAPI or Node.js (Express) + Kafka";
pub const PLAIN_BACKEND: &str = "FastAPI or Node.js (Express)";
pub const DATABASE: &str = "PostgreSQL";
pub const ML_STACK: [&str; 3] = ["Python", "PyTorch / TensorFlow", "scikit-learn"];
pub const BLOCKCHAIN_STACK: [&str; 2] = ["Solidity / Rust", "Web3.js / ethers.js"];
pub const CONTAINERS: &str = "Docker";
pub const CI_CD: &str = "CI/CD (GitHub Actions)";

pub fn recommend_stack(text: &str, taxonomy: &Taxonomy, mode: MatchMode) -> RecommendedTechStack {
    let triggers = &taxonomy.stack;

    let mut frontend = Vec::new();
    if mode.found(text, triggers.web_frontend) {
        push_unique(&mut frontend, REACT);
    }
    if mode.found(text, triggers.mobile_frontend) {
        push_unique(&mut frontend, CROSS_PLATFORM_MOBILE);
    }
    if frontend.is_empty() {
        push_unique(&mut frontend, REACT);
    }

    let backend = if mode.found(text, triggers.streaming) {
        vec![STREAMING_BACKEND.to_string()]
    } else {
        vec![PLAIN_BACKEND.to_string()]
    };

    let ml_stack = triggers
        .ml
        .iter()
        .any(|phrases| mode.found(text, phrases))
        .then(|| owned_list(&ML_STACK));

    let blockchain = mode
        .found(text, triggers.blockchain)
        .then(|| owned_list(&BLOCKCHAIN_STACK));

    let mut devops = vec![CONTAINERS.to_string()];
    if mode.found(text, triggers.deployment) {
        push_unique(&mut devops, CI_CD);
    }

    RecommendedTechStack {
        frontend,
        backend,
        database: vec![DATABASE.to_string()],
        ml_stack,
        blockchain,
        devops: Some(devops),
    }
}

/// Insertion-ordered de-duplication so rendered output stays stable.
fn push_unique(items: &mut Vec<String>, item: &str) {
    if !items.iter().any(|existing| existing == item) {
        items.push(item.to_string());
    }
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
