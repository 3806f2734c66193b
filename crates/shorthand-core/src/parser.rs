use crate::config::{AliasMap, is_repo_form};

/// Outcome of decomposing one shorthand input. `repo` is `None` or a
/// well-formed `owner/name`; `issue` is `None` or a run of decimal digits;
/// `matched_key` is the alias key that was consumed, `None` when the input
/// used the explicit `owner/name` form or resolved nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    pub repo: Option<String>,
    pub issue: Option<String>,
    pub matched_key: Option<String>,
}

/// Decompose shorthand input against the alias map. Pure; default-repo
/// substitution is the ranker's job.
///
/// Grammar, longest match left to right: an alias key prefixing the input
/// with a word boundary after it (end, space, or `#`), else an explicit
/// `owner/name` token, then an optional `#digits` issue suffix separated by
/// at most one space. A bare `#digits` input carries the issue alone.
/// Everything else is unresolved free text.
pub fn parse(alias_map: &AliasMap, input: &str) -> ParseResult {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::default();
    }

    // The lexicographic scan plus the longest-span rule makes alias
    // selection deterministic: two distinct keys cannot match the same span.
    let mut matched: Option<(&str, &str)> = None;
    for (key, repo) in alias_map {
        let Some(rest) = input.strip_prefix(key.as_str()) else {
            continue;
        };
        if !(rest.is_empty() || rest.starts_with(' ') || rest.starts_with('#')) {
            continue;
        }
        if matched.is_none_or(|(best, _)| key.len() > best.len()) {
            matched = Some((key, repo));
        }
    }

    if let Some((key, repo)) = matched {
        return ParseResult {
            repo: Some(repo.to_string()),
            issue: issue_suffix(&input[key.len()..]),
            matched_key: Some(key.to_string()),
        };
    }

    let token_end = input.find([' ', '#']).unwrap_or(input.len());
    let token = &input[..token_end];
    if is_repo_form(token) {
        return ParseResult {
            repo: Some(token.to_string()),
            issue: issue_suffix(&input[token_end..]),
            matched_key: None,
        };
    }

    // Bare `#digits`: legal only when the caller substitutes a default repo.
    ParseResult {
        repo: None,
        issue: issue_suffix(input),
        matched_key: None,
    }
}

/// Consume a remainder of exactly `#digits`, optionally preceded by one
/// space. Digit runs with a leading zero (other than `"0"` itself) are
/// malformed and stay unconsumed, like `#` followed by non-digits.
fn issue_suffix(rest: &str) -> Option<String> {
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let digits = rest.strip_prefix('#')?;

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }

    Some(digits.to_string())
}
