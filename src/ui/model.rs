use crate::config::{Config, LoadFailurePolicy};
use crate::error::Result;
use crate::process;
use crate::ui::render::Theme;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::PathBuf;

// small constants reused by rendering code
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;
// lines taken by everything except the entries: margins, title, status, pagination, help
pub const CHROME_LINES: usize = 8;
// two text lines plus a spacer per entry
pub const LINES_PER_ENTRY: usize = 3;

pub const NEW_DEFAULT_SESSION: &str = "New Default Session";
pub const NEW_SESSION_WITH_LAYOUT: &str = "New Session With Layout";

/// One selectable row in the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    NewDefaultSession,
    NewSessionWithLayout,
    Layout(String),
    Session(String),
}

impl Entry {
    pub fn title(&self) -> &str {
        match self {
            Entry::NewDefaultSession => NEW_DEFAULT_SESSION,
            Entry::NewSessionWithLayout => NEW_SESSION_WITH_LAYOUT,
            Entry::Layout(name) | Entry::Session(name) => name,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Entry::NewDefaultSession | Entry::NewSessionWithLayout => "New".to_string(),
            Entry::Layout(name) => format!("New session with layout {name}"),
            Entry::Session(name) => format!("Attach to session {name}"),
        }
    }

    /// Text the fuzzy filter matches against.
    pub fn filter_value(&self) -> String {
        match self {
            Entry::NewDefaultSession | Entry::NewSessionWithLayout => self.title().to_string(),
            Entry::Layout(name) => format!("layout {name}"),
            Entry::Session(name) => format!("attach session {name}"),
        }
    }
}

/// The command to hand the terminal over to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub program: PathBuf,
    /// Full argument vector; `args[0]` is the tool name.
    pub args: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Layouts,
    Sessions,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Layouts => write!(f, "layouts"),
            Source::Sessions => write!(f, "sessions"),
        }
    }
}

pub type Resolver = fn(&str) -> Result<PathBuf>;

#[derive(Clone)]
pub struct Model {
    pub entries: Vec<Entry>,
    pub layouts: Vec<String>,
    pub sessions: Vec<String>,
    pub err: Option<String>,
    pub status: Option<String>,
    pub action: Option<Action>,
    pub phase: Phase,
    // set when the loop ends on a failure that should produce a non-zero exit
    pub fatal: bool,
    pub layouts_pending: bool,
    pub sessions_pending: bool,
    // filter input state
    pub filtering: bool,
    pub filter: String,
    // selection, as an index into the visible entries
    pub cursor: usize,
    pub per_page: usize,
    pub screen_width: usize,
    pub screen_height: usize,
    pub theme: Theme,
    pub tool: String,
    pub layouts_dir: PathBuf,
    pub on_load_error: LoadFailurePolicy,
    pub resolve: Resolver,
}

pub fn initial_model(config: &Config) -> Model {
    let mut m = Model {
        entries: Vec::new(),
        layouts: Vec::new(),
        sessions: Vec::new(),
        err: None,
        status: None,
        action: None,
        phase: Phase::Loading,
        fatal: false,
        layouts_pending: true,
        sessions_pending: true,
        filtering: false,
        filter: String::new(),
        cursor: 0,
        per_page: 0,
        screen_width: DEFAULT_WIDTH,
        screen_height: DEFAULT_HEIGHT,
        theme: Theme::default(),
        tool: config.tool.clone(),
        layouts_dir: config.layouts_dir.clone(),
        on_load_error: config.on_load_error,
        resolve: process::resolve_binary,
    };
    m.set_screen(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    m.rebuild();
    m
}

/// Materializes the selectable list: the default-session entry, every session,
/// then every layout (or the layout placeholder when there are none).
pub fn build_entries(sessions: &[String], layouts: &[String]) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(2 + sessions.len() + layouts.len());
    entries.push(Entry::NewDefaultSession);
    entries.extend(sessions.iter().cloned().map(Entry::Session));
    if layouts.is_empty() {
        entries.push(Entry::NewSessionWithLayout);
    } else {
        entries.extend(layouts.iter().cloned().map(Entry::Layout));
    }
    entries
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) -> Option<crate::ui::Effect> {
        crate::ui::update::handle_update(self, msg)
    }

    pub fn rebuild(&mut self) {
        self.entries = build_entries(&self.sessions, &self.layouts);
        self.clamp_cursor();
    }

    pub fn set_screen(&mut self, width: usize, height: usize) {
        self.screen_width = width;
        self.screen_height = height;
        self.per_page = usize::max(height.saturating_sub(CHROME_LINES) / LINES_PER_ENTRY, 1);
    }

    pub fn is_loading(&self) -> bool {
        self.layouts_pending || self.sessions_pending
    }

    /// Entries that pass the current filter, best match first.
    pub fn visible_entries(&self) -> Vec<Entry> {
        if self.filter.is_empty() {
            return self.entries.clone();
        }
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| {
                matcher
                    .fuzzy_match(&e.filter_value(), &self.filter)
                    .map(|score| (score, i))
            })
            .collect();
        // highest score first; equal scores keep list order
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored
            .into_iter()
            .map(|(_, i)| self.entries[i].clone())
            .collect()
    }

    pub fn selected(&self) -> Option<Entry> {
        self.visible_entries().get(self.cursor).cloned()
    }

    pub fn clamp_cursor(&mut self) {
        let total = self.visible_entries().len();
        if self.cursor >= total {
            self.cursor = total.saturating_sub(1);
        }
    }

    pub fn page(&self) -> usize {
        if self.per_page == 0 {
            0
        } else {
            self.cursor / self.per_page
        }
    }

    pub fn total_pages(&self) -> usize {
        let total = self.visible_entries().len();
        if total == 0 || self.per_page == 0 {
            1
        } else {
            total.div_ceil(self.per_page)
        }
    }

    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }

    // helper to get titles of the visible entries
    pub fn visible_titles(&self) -> Vec<String> {
        self.visible_entries()
            .iter()
            .map(|e| e.title().to_string())
            .collect()
    }
}
