//! Launcher-agnostic completion records. The renderer maps these onto the
//! Alfred item schema; nothing here knows about JSON field names.

/// Icon classes a candidate can carry. Asset paths are a renderer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Repo,
    Issue,
    Editor,
    Terminal,
    Finder,
}

/// What selecting a candidate (or one of its alternates) should do
/// downstream. Serialized into the launcher's `action` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Term,
    Reveal,
}

impl ActionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Term => "term",
            // The downstream action script names the reveal handler after
            // the file browser.
            Self::Reveal => "finder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub arg: String,
    pub kind: Option<ActionKind>,
}

impl Action {
    pub fn new(arg: impl Into<String>) -> Self {
        Self {
            arg: arg.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: ActionKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Cmd,
    Alt,
}

impl Modifier {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cmd => "cmd",
            Self::Alt => "alt",
        }
    }
}

/// Alternate action reachable through a modifier key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub modifier: Modifier,
    pub subtitle: String,
    pub action: Action,
    pub icon: Icon,
}

/// One suggested completion. `complete == false` marks a non-actionable
/// "keep typing" placeholder; ordering within a candidate list is
/// significant and owned by the producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub action: Option<Action>,
    pub complete: bool,
    pub autocomplete: Option<String>,
    pub icon: Option<Icon>,
    pub source_key: Option<String>,
    pub copy_text: Option<String>,
    pub alternates: Vec<Alternate>,
}

impl Candidate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            subtitle: None,
            action: None,
            complete: false,
            autocomplete: None,
            icon: None,
            source_key: None,
            copy_text: None,
            alternates: Vec::new(),
        }
    }

    /// Visible, non-actionable failure row.
    pub fn error(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::new(title).with_subtitle(subtitle)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_source_key(mut self, source_key: impl Into<String>) -> Self {
        self.source_key = Some(source_key.into());
        self
    }

    pub fn with_copy_text(mut self, copy_text: impl Into<String>) -> Self {
        self.copy_text = Some(copy_text.into());
        self
    }

    pub fn with_alternate(mut self, alternate: Alternate) -> Self {
        self.alternates.push(alternate);
        self
    }
}
