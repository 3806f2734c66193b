use crate::candidate::{Action, Candidate, Icon};
use crate::config::AliasMap;
use crate::parser::ParseResult;

const GITHUB_BASE_URL: &str = "https://github.com/";
const TITLE_SUFFIX: &str = " on GitHub";

/// Turn one parse outcome into the ordered candidate list: resolved primary
/// first, alias-prefix suggestions in map order, literal passthrough last.
/// Default-repo substitution happens here, not in the parser.
pub fn rank(
    parsed: &ParseResult,
    alias_map: &AliasMap,
    default_repo: Option<&str>,
    raw_input: &str,
) -> Vec<Candidate> {
    if raw_input.trim().is_empty() {
        return Vec::new();
    }

    let mut used_default = false;
    let repo = match (parsed.repo.as_deref(), default_repo) {
        (Some(repo), _) => Some(repo),
        (None, Some(default)) => {
            used_default = true;
            Some(default)
        }
        (None, None) => None,
    };

    let mut candidates = Vec::new();

    if let Some(repo) = repo {
        candidates.push(primary_candidate(repo, parsed, used_default));
    }

    // Suggestions and passthrough only make sense while the user has not
    // committed to a specific repo or the explicit form.
    if !raw_input.contains([' ', '/']) {
        for (key, target) in alias_map {
            if !key.starts_with(raw_input)
                || Some(target.as_str()) == repo
                || Some(key.as_str()) == parsed.matched_key.as_deref()
            {
                continue;
            }
            candidates.push(suggestion_candidate(key, target));
        }

        candidates.push(passthrough_candidate(raw_input));
    }

    candidates
}

fn primary_candidate(repo: &str, parsed: &ParseResult, used_default: bool) -> Candidate {
    let issue = parsed.issue.as_deref();
    let mut id = format!("gh:{repo}");
    let mut title = format!("Open {repo}");
    let mut arg = format!("open {GITHUB_BASE_URL}{repo}");
    let mut icon = Icon::Repo;

    if let Some(issue) = issue {
        id.push('#');
        id.push_str(issue);
        title.push('#');
        title.push_str(issue);
        arg.push_str("/issues/");
        arg.push_str(issue);
        icon = Icon::Issue;
    }

    // Annotation order is fixed: matched shorthand first, then the default
    // marker, then the suffix.
    if let Some(key) = parsed.matched_key.as_deref() {
        title.push_str(" (");
        title.push_str(key);
        if let Some(issue) = issue {
            title.push('#');
            title.push_str(issue);
        }
        title.push(')');
    }
    if used_default {
        title.push_str(" (default repo)");
    }
    title.push_str(TITLE_SUFFIX);

    let mut candidate = Candidate::new(title)
        .with_id(id)
        .with_action(Action::new(arg))
        .with_icon(icon)
        .with_complete(true);

    if let Some(key) = &parsed.matched_key {
        candidate = candidate.with_source_key(key.clone());
    }

    candidate
}

fn suggestion_candidate(key: &str, repo: &str) -> Candidate {
    Candidate::new(format!("Open {repo} ({key}){TITLE_SUFFIX}"))
        .with_id(format!("gh:{repo}"))
        .with_action(Action::new(format!("open {GITHUB_BASE_URL}{repo}")))
        .with_autocomplete(format!(" {key}"))
        .with_icon(Icon::Repo)
        .with_source_key(key)
        .with_complete(true)
}

fn passthrough_candidate(raw_input: &str) -> Candidate {
    Candidate::new(format!("Open {raw_input}...{TITLE_SUFFIX}"))
        .with_autocomplete(format!(" {raw_input}"))
}

#[cfg(test)]
mod tests {
    use crate::parser;

    use super::*;

    fn alias_map() -> AliasMap {
        AliasMap::from([
            ("df".to_string(), "octavian/dotfiles".to_string()),
            ("w".to_string(), "acme/widgets".to_string()),
            ("wx".to_string(), "acme/widgets-extra".to_string()),
        ])
    }

    fn rank_input(input: &str, default_repo: Option<&str>) -> Vec<Candidate> {
        let map = alias_map();
        let parsed = parser::parse(&map, input);
        rank(&parsed, &map, default_repo, input)
    }

    #[test]
    fn resolved_alias_produces_primary_with_annotated_title() {
        let candidates = rank_input("df", None);
        let primary = candidates.first().expect("primary candidate");

        assert_eq!(primary.title, "Open octavian/dotfiles (df) on GitHub");
        assert_eq!(primary.id.as_deref(), Some("gh:octavian/dotfiles"));
        assert_eq!(
            primary.action.as_ref().map(|action| action.arg.as_str()),
            Some("open https://github.com/octavian/dotfiles")
        );
        assert_eq!(primary.icon, Some(Icon::Repo));
        assert!(primary.complete);
    }

    #[test]
    fn issue_reference_switches_icon_arg_and_title() {
        let candidates = rank_input("df#123", None);
        let primary = candidates.first().expect("primary candidate");

        assert_eq!(primary.title, "Open octavian/dotfiles#123 (df#123) on GitHub");
        assert_eq!(primary.id.as_deref(), Some("gh:octavian/dotfiles#123"));
        assert_eq!(
            primary.action.as_ref().map(|action| action.arg.as_str()),
            Some("open https://github.com/octavian/dotfiles/issues/123")
        );
        assert_eq!(primary.icon, Some(Icon::Issue));
    }

    #[test]
    fn explicit_form_skips_annotation_and_suggestions() {
        let candidates = rank_input("acme/gadgets", None);

        assert_eq!(candidates.len(), 1, "slash input suppresses suggestions");
        assert_eq!(candidates[0].title, "Open acme/gadgets on GitHub");
        assert_eq!(candidates[0].source_key, None);
    }

    #[test]
    fn default_repo_substitution_annotates_title_and_targets_default() {
        let candidates = rank_input("#123", Some("acme/widgets"));
        let primary = candidates.first().expect("primary candidate");

        assert_eq!(primary.title, "Open acme/widgets#123 (default repo) on GitHub");
        assert_eq!(
            primary.action.as_ref().map(|action| action.arg.as_str()),
            Some("open https://github.com/acme/widgets/issues/123")
        );
    }

    #[test]
    fn suggestions_cover_prefixed_keys_without_duplicating_primary() {
        let candidates = rank_input("w", None);

        let titles: Vec<&str> = candidates
            .iter()
            .map(|candidate| candidate.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Open acme/widgets (w) on GitHub",
                "Open acme/widgets-extra (wx) on GitHub",
                "Open w... on GitHub",
            ]
        );

        let suggestion = &candidates[1];
        assert_eq!(suggestion.autocomplete.as_deref(), Some(" wx"));
        assert!(suggestion.complete);
    }

    #[test]
    fn passthrough_is_last_and_not_actionable() {
        let candidates = rank_input("xy", None);
        let passthrough = candidates.last().expect("passthrough candidate");

        assert_eq!(passthrough.title, "Open xy... on GitHub");
        assert_eq!(passthrough.autocomplete.as_deref(), Some(" xy"));
        assert!(!passthrough.complete);
        assert_eq!(passthrough.action, None);
    }

    #[test]
    fn unresolved_issue_without_default_repo_degrades_to_passthrough() {
        let candidates = rank_input("#123", None);

        assert_eq!(candidates.len(), 1);
        assert!(!candidates[0].complete);
    }

    #[test]
    fn empty_and_blank_input_produce_no_candidates() {
        assert!(rank_input("", Some("acme/widgets")).is_empty());
        assert!(rank_input("   ", Some("acme/widgets")).is_empty());
    }

    #[test]
    fn ranking_is_deterministic_for_identical_inputs() {
        let first = rank_input("w", Some("octavian/dotfiles"));
        let second = rank_input("w", Some("octavian/dotfiles"));

        assert_eq!(first, second);
    }
}
