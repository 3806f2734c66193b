use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::candidate::{Action, ActionKind, Alternate, Candidate, Icon, Modifier};
use crate::fuzzy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectMode {
    Edit,
    Term,
}

impl ProjectMode {
    const fn action_kind(self) -> ActionKind {
        match self {
            Self::Edit => ActionKind::Edit,
            Self::Term => ActionKind::Term,
        }
    }

    const fn complementary_kind(self) -> ActionKind {
        match self {
            Self::Edit => ActionKind::Term,
            Self::Term => ActionKind::Edit,
        }
    }

    const fn uid_prefix(self) -> &'static str {
        match self {
            Self::Edit => "ghe",
            Self::Term => "ght",
        }
    }
}

/// A discovered project directory: the root's label joined with the
/// subdirectory name, plus the expanded path on disk. Computed fresh per
/// call; the path existed at scan time but races after that are not
/// guarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub short_path: String,
    pub full_path: PathBuf,
}

/// Complete project directories across the configured roots. A root that
/// cannot be scanned contributes exactly one error candidate and nothing
/// else; the remaining roots still produce their entries.
pub fn complete(
    roots: &BTreeMap<String, PathBuf>,
    search: &str,
    mode: ProjectMode,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut entries = Vec::new();

    for (label, root) in roots {
        match scan_root(label, root) {
            Ok(found) => entries.extend(found),
            Err(error) => candidates.push(Candidate::error(
                format!("Invalid project directory: {label}"),
                error.to_string(),
            )),
        }
    }

    candidates.extend(
        rank_entries(entries, search)
            .iter()
            .map(|entry| project_candidate(entry, mode)),
    );

    candidates
}

/// Immediate subdirectories of one root, in file-name order.
fn scan_root(label: &str, root: &Path) -> Result<Vec<ProjectEntry>, walkdir::Error> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        entries.push(ProjectEntry {
            short_path: format!("{label}/{name}"),
            full_path: entry.into_path(),
        });
    }

    Ok(entries)
}

/// Non-empty search: keep fuzzy matches ordered by descending relevance,
/// discovery order breaking ties. Empty search: discovery order, untouched.
fn rank_entries(entries: Vec<ProjectEntry>, search: &str) -> Vec<ProjectEntry> {
    let search = search.trim();
    if search.is_empty() {
        return entries;
    }

    let mut scored: Vec<(i32, usize, ProjectEntry)> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            fuzzy::score(search, &entry.short_path).map(|score| (score, index, entry))
        })
        .collect();

    scored.sort_by(|left, right| right.0.cmp(&left.0).then(left.1.cmp(&right.1)));
    scored.into_iter().map(|(_, _, entry)| entry).collect()
}

fn project_candidate(entry: &ProjectEntry, mode: ProjectMode) -> Candidate {
    let full_path = entry.full_path.to_string_lossy().to_string();
    let primary = mode.action_kind();
    let complementary = mode.complementary_kind();

    Candidate::new(&entry.short_path)
        .with_id(format!("{}:{}", mode.uid_prefix(), entry.short_path))
        .with_subtitle(action_subtitle(primary, &entry.short_path))
        .with_action(Action::new(&full_path).with_kind(primary))
        .with_complete(true)
        .with_icon(action_icon(primary))
        .with_copy_text(&full_path)
        .with_alternate(Alternate {
            modifier: Modifier::Cmd,
            subtitle: action_subtitle(complementary, &entry.short_path),
            action: Action::new(&full_path).with_kind(complementary),
            icon: action_icon(complementary),
        })
        .with_alternate(Alternate {
            modifier: Modifier::Alt,
            subtitle: action_subtitle(ActionKind::Reveal, &entry.short_path),
            action: Action::new(&full_path).with_kind(ActionKind::Reveal),
            icon: action_icon(ActionKind::Reveal),
        })
}

fn action_subtitle(kind: ActionKind, short_path: &str) -> String {
    match kind {
        ActionKind::Edit => format!("Edit {short_path}"),
        ActionKind::Term => format!("Open terminal in {short_path}"),
        ActionKind::Reveal => format!("Open Finder in {short_path}"),
    }
}

const fn action_icon(kind: ActionKind) -> Icon {
    match kind {
        ActionKind::Edit => Icon::Editor,
        ActionKind::Term => Icon::Terminal,
        ActionKind::Reveal => Icon::Finder,
    }
}
