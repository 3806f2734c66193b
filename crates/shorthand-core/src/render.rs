use alfred_feedback::{Feedback, Item, ItemIcon, ItemModifier, ItemText};

use crate::candidate::{Alternate, Candidate, Icon};

/// Launcher variable carrying the downstream action for a selected item.
pub const ACTION_VARIABLE: &str = "action";

const REPO_ICON_PATH: &str = "assets/icon-repo.png";
const ISSUE_ICON_PATH: &str = "assets/icon-issue.png";
const EDITOR_ICON_PATH: &str = "assets/icon-editor.png";
const TERMINAL_ICON_PATH: &str = "assets/icon-terminal.png";
const FINDER_ICON_PATH: &str = "assets/icon-finder.png";

pub fn feedback(candidates: &[Candidate]) -> Feedback {
    Feedback::new(candidates.iter().map(item).collect())
}

pub fn item(candidate: &Candidate) -> Item {
    let mut item = Item::new(&candidate.title).with_valid(candidate.complete);

    if let Some(id) = &candidate.id {
        item = item.with_uid(id);
    }
    if let Some(subtitle) = &candidate.subtitle {
        item = item.with_subtitle(subtitle);
    }
    if let Some(action) = &candidate.action {
        item = item.with_arg(&action.arg);
        if let Some(kind) = action.kind {
            item = item.with_variable(ACTION_VARIABLE, kind.as_str());
        }
    }
    if let Some(autocomplete) = &candidate.autocomplete {
        item = item.with_autocomplete(autocomplete);
    }
    if let Some(icon) = candidate.icon {
        item = item.with_icon(ItemIcon::new(asset_path(icon)));
    }
    if let Some(copy_text) = &candidate.copy_text {
        item = item.with_text(
            ItemText::new()
                .with_copy(copy_text)
                .with_largetype(copy_text),
        );
    }
    for alternate in &candidate.alternates {
        item = item.with_mod(alternate.modifier.key(), modifier_item(alternate));
    }

    item
}

fn modifier_item(alternate: &Alternate) -> ItemModifier {
    let mut modifier = ItemModifier::new()
        .with_subtitle(&alternate.subtitle)
        .with_arg(&alternate.action.arg)
        .with_valid(true)
        .with_icon(ItemIcon::new(asset_path(alternate.icon)));

    if let Some(kind) = alternate.action.kind {
        modifier = modifier.with_variable(ACTION_VARIABLE, kind.as_str());
    }

    modifier
}

pub const fn asset_path(icon: Icon) -> &'static str {
    match icon {
        Icon::Repo => REPO_ICON_PATH,
        Icon::Issue => ISSUE_ICON_PATH,
        Icon::Editor => EDITOR_ICON_PATH,
        Icon::Terminal => TERMINAL_ICON_PATH,
        Icon::Finder => FINDER_ICON_PATH,
    }
}

#[cfg(test)]
mod tests {
    use crate::candidate::{Action, ActionKind, Modifier};

    use super::*;

    #[test]
    fn shorthand_candidate_maps_to_actionable_item() {
        let candidate = Candidate::new("Open acme/widgets (w) on GitHub")
            .with_id("gh:acme/widgets")
            .with_action(Action::new("open https://github.com/acme/widgets"))
            .with_autocomplete(" w")
            .with_icon(Icon::Repo)
            .with_complete(true);

        let rendered = item(&candidate);

        assert_eq!(rendered.uid.as_deref(), Some("gh:acme/widgets"));
        assert_eq!(
            rendered.arg.as_deref(),
            Some("open https://github.com/acme/widgets")
        );
        assert_eq!(rendered.valid, Some(true));
        assert_eq!(rendered.autocomplete.as_deref(), Some(" w"));
        assert_eq!(
            rendered.icon.as_ref().map(|icon| icon.path.as_str()),
            Some(REPO_ICON_PATH)
        );
        assert_eq!(rendered.variables, None, "no action kind, no variables");
    }

    #[test]
    fn placeholder_candidate_renders_invalid_without_arg() {
        let rendered = item(
            &Candidate::new("Open xy... on GitHub").with_autocomplete(" xy"),
        );

        assert_eq!(rendered.valid, Some(false));
        assert_eq!(rendered.arg, None);
        assert_eq!(rendered.uid, None);
    }

    #[test]
    fn project_candidate_renders_mods_variables_and_copy_text() {
        let candidate = Candidate::new("work/foo")
            .with_id("ghe:work/foo")
            .with_subtitle("Edit work/foo")
            .with_action(Action::new("/home/u/work/foo").with_kind(ActionKind::Edit))
            .with_complete(true)
            .with_icon(Icon::Editor)
            .with_copy_text("/home/u/work/foo")
            .with_alternate(Alternate {
                modifier: Modifier::Cmd,
                subtitle: "Open terminal in work/foo".to_string(),
                action: Action::new("/home/u/work/foo").with_kind(ActionKind::Term),
                icon: Icon::Terminal,
            })
            .with_alternate(Alternate {
                modifier: Modifier::Alt,
                subtitle: "Open Finder in work/foo".to_string(),
                action: Action::new("/home/u/work/foo").with_kind(ActionKind::Reveal),
                icon: Icon::Finder,
            });

        let rendered = item(&candidate);
        let json = serde_json::to_value(&rendered).expect("serialize item");

        assert_eq!(
            json.pointer("/variables/action").and_then(|v| v.as_str()),
            Some("edit")
        );
        assert_eq!(
            json.pointer("/mods/cmd/variables/action")
                .and_then(|v| v.as_str()),
            Some("term")
        );
        assert_eq!(
            json.pointer("/mods/alt/variables/action")
                .and_then(|v| v.as_str()),
            Some("finder")
        );
        assert_eq!(
            json.pointer("/mods/cmd/icon/path").and_then(|v| v.as_str()),
            Some(TERMINAL_ICON_PATH)
        );
        assert_eq!(
            json.pointer("/text/copy").and_then(|v| v.as_str()),
            Some("/home/u/work/foo")
        );
        assert_eq!(
            json.pointer("/text/largetype").and_then(|v| v.as_str()),
            Some("/home/u/work/foo")
        );
    }

    #[test]
    fn feedback_preserves_candidate_order() {
        let candidates = vec![
            Candidate::new("first").with_complete(true),
            Candidate::new("second"),
        ];

        let payload = feedback(&candidates);
        let titles: Vec<&str> = payload
            .items
            .iter()
            .map(|item| item.title.as_str())
            .collect();

        assert_eq!(titles, vec!["first", "second"]);
    }
}
