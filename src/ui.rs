// UI module root: state, update logic, rendering and the interactive runner live under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

// Re-export commonly used symbols so call sites can use `crate::ui::Model` etc.
pub use model::{build_entries, Action, Entry, Model, Phase, Source};
pub use render::{render_full, Theme};
pub use run::run;
pub use update::{handle_update, Effect};

// Messages consumed by the update logic. Loader results arrive through the same
// channel as key presses, one at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    LayoutsLoaded(Vec<String>),
    SessionsLoaded(Vec<String>),
    LoadFailed { source: Source, error: String },
    Status(String),
    WindowSize { width: usize, height: usize },
    Interrupt,
    KeyEnter,
    KeyEsc,
    KeyBackspace,
    KeyUp,
    KeyDown,
    KeyPageUp,
    KeyPageDown,
    KeyHome,
    KeyEnd,
    Rune(char),
}
