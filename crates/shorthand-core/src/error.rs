use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("repo alias key {0:?} must be non-empty and contain no whitespace")]
    InvalidAliasKey(String),
    #[error("repo alias {key:?} maps to {repo:?}, expected owner/name")]
    InvalidAliasRepo { key: String, repo: String },
    #[error("default repo {0:?} is not of the form owner/name")]
    InvalidDefaultRepo(String),
    #[error("project directory {label:?} has an empty path")]
    EmptyProjectDir { label: String },
}
