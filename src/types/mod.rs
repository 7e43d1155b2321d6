pub mod config;
pub mod evaluation;
pub mod proposal;
