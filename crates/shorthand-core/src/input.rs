use crate::projects::ProjectMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Shorthand(String),
    Projects { search: String, mode: ProjectMode },
}

/// The first character of the launcher query selects the behavior: a leading
/// space resolves repo shorthand over the rest, a leading `e` or `t` token
/// completes project directories for the editor or terminal. Anything else
/// is not a recognized mode and yields no candidates.
pub fn parse_mode(raw: &str) -> Option<InputMode> {
    if raw.is_empty() {
        return None;
    }

    if let Some(rest) = raw.strip_prefix(' ') {
        return Some(InputMode::Shorthand(rest.to_string()));
    }

    let (token, rest) = match raw.split_once(' ') {
        Some((token, rest)) => (token, rest),
        None => (raw, ""),
    };

    let mode = match token {
        "e" => ProjectMode::Edit,
        "t" => ProjectMode::Term,
        _ => return None,
    };

    Some(InputMode::Projects {
        search: rest.trim().to_string(),
        mode,
    })
}
