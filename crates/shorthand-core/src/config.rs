use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "~/.gh-shorthand.yml";
pub const CONFIG_PATH_ENV: &str = "GH_SHORTHAND_CONFIG";

/// Alias key → canonical `owner/repo`. `BTreeMap` iteration order is the
/// deterministic order the parser and ranker rely on.
pub type AliasMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub repos: AliasMap,
    pub default_repo: Option<String>,
    pub project_dirs: BTreeMap<String, PathBuf>,
}

/// On-disk shape of `~/.gh-shorthand.yml`.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    repos: BTreeMap<String, String>,
    #[serde(default)]
    default_repo: Option<String>,
    #[serde(default)]
    project_dirs: BTreeMap<String, String>,
}

impl Config {
    pub fn load(path: &Path, home: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&raw, home)
    }

    pub fn from_yaml(raw: &str, home: &str) -> Result<Self, ConfigError> {
        let parsed: RawConfig = serde_yaml::from_str(raw)?;

        for (key, repo) in &parsed.repos {
            if key.is_empty() || key.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidAliasKey(key.clone()));
            }
            if !is_repo_form(repo) {
                return Err(ConfigError::InvalidAliasRepo {
                    key: key.clone(),
                    repo: repo.clone(),
                });
            }
        }

        let default_repo = match parsed.default_repo.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(repo) if is_repo_form(repo) => Some(repo.to_string()),
            Some(repo) => return Err(ConfigError::InvalidDefaultRepo(repo.to_string())),
        };

        let mut project_dirs = BTreeMap::new();
        for (label, dir) in &parsed.project_dirs {
            let expanded = expand_home_tokens(dir, home);
            if expanded.is_empty() {
                return Err(ConfigError::EmptyProjectDir {
                    label: label.clone(),
                });
            }
            project_dirs.insert(label.clone(), PathBuf::from(expanded));
        }

        Ok(Self {
            repos: parsed.repos,
            default_repo,
            project_dirs,
        })
    }
}

/// Config path precedence: explicit flag, then `GH_SHORTHAND_CONFIG`, then
/// `~/.gh-shorthand.yml`. The env value is injected so tests stay off the
/// process environment.
pub fn resolve_config_path(flag: Option<PathBuf>, env_value: Option<&str>, home: &str) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    if let Some(value) = env_value.map(str::trim).filter(|value| !value.is_empty()) {
        return PathBuf::from(expand_home_tokens(value, home));
    }

    PathBuf::from(expand_home_tokens(DEFAULT_CONFIG_PATH, home))
}

/// Exactly one `/` separating two non-empty, whitespace-free segments.
pub fn is_repo_form(repo: &str) -> bool {
    let Some((owner, name)) = repo.split_once('/') else {
        return false;
    };

    !owner.is_empty()
        && !name.is_empty()
        && !name.contains('/')
        && !repo.contains(char::is_whitespace)
}

pub fn expand_home_tokens(raw: &str, home: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut expanded = trimmed.replace("$HOME", home);

    if expanded == "~" {
        expanded = home.to_string();
    } else if let Some(rest) = expanded.strip_prefix("~/") {
        expanded = format!("{home}/{rest}");
    }

    expanded
}
