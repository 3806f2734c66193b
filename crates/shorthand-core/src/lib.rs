//! GitHub shorthand resolution for the Alfred workflow.
//!
//! - `config`: YAML config load, validation, path resolution.
//! - `input`: leading mode-indicator dispatch.
//! - `parser`: shorthand grammar over the alias map.
//! - `ranker`: resolved/suggestion/passthrough candidate list.
//! - `fuzzy`: subsequence relevance scoring.
//! - `projects`: project directory completion.
//! - `render`: candidate → Alfred item assembly.

pub mod candidate;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod input;
pub mod parser;
pub mod projects;
pub mod ranker;
pub mod render;

pub use candidate::{Action, ActionKind, Alternate, Candidate, Icon, Modifier};
pub use config::{AliasMap, Config, resolve_config_path};
pub use error::ConfigError;
pub use input::InputMode;
pub use parser::ParseResult;
pub use projects::{ProjectEntry, ProjectMode};

use alfred_feedback::Feedback;

/// Resolve one launcher query into an ordered candidate list.
pub fn resolve_candidates(config: &Config, raw_input: &str) -> Vec<Candidate> {
    match input::parse_mode(raw_input) {
        None => Vec::new(),
        Some(InputMode::Shorthand(text)) => {
            let parsed = parser::parse(&config.repos, &text);
            ranker::rank(&parsed, &config.repos, config.default_repo.as_deref(), &text)
        }
        Some(InputMode::Projects { search, mode }) => {
            projects::complete(&config.project_dirs, &search, mode)
        }
    }
}

/// Resolve and render in one step; what the CLI serializes to stdout.
pub fn build_feedback(config: &Config, raw_input: &str) -> Feedback {
    render::feedback(&resolve_candidates(config, raw_input))
}
