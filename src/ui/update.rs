use crate::config::LoadFailurePolicy;
use crate::ui::model::{Action, Entry, Model, Phase, Source};
use crate::ui::Msg;
use log::{debug, error, info, warn};

/// Side effects the runner performs after a message has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Leave the interactive program.
    Quit,
    /// Dispatch both loaders again.
    Reload,
}

pub fn handle_update(m: &mut Model, msg: Msg) -> Option<Effect> {
    if m.phase == Phase::Exiting {
        return Some(Effect::Quit);
    }
    match msg {
        Msg::LayoutsLoaded(layouts) => handle_loaded(m, Source::Layouts, layouts),
        Msg::SessionsLoaded(sessions) => handle_loaded(m, Source::Sessions, sessions),
        Msg::LoadFailed { source, error } => handle_load_failed(m, source, error),
        Msg::Status(status) => {
            m.status = Some(status);
            None
        }
        Msg::WindowSize { width, height } => {
            m.set_screen(width, height);
            None
        }
        Msg::Interrupt => quit(m),
        Msg::KeyEnter => handle_key_enter(m),
        Msg::KeyEsc => handle_key_esc(m),
        Msg::KeyBackspace => handle_key_backspace(m),
        Msg::KeyUp => move_cursor_up(m),
        Msg::KeyDown => move_cursor_down(m),
        Msg::KeyPageUp => page_up(m),
        Msg::KeyPageDown => page_down(m),
        Msg::KeyHome => {
            m.cursor = 0;
            None
        }
        Msg::KeyEnd => go_to_end(m),
        Msg::Rune(r) => handle_rune(m, r),
    }
}

fn set_pending(m: &mut Model, source: Source, pending: bool) {
    match source {
        Source::Layouts => m.layouts_pending = pending,
        Source::Sessions => m.sessions_pending = pending,
    }
    if !m.is_loading() {
        m.phase = Phase::Ready;
    }
}

fn handle_loaded(m: &mut Model, source: Source, names: Vec<String>) -> Option<Effect> {
    debug!("{source} loaded: {} entries", names.len());
    match source {
        Source::Layouts => m.layouts = names,
        Source::Sessions => m.sessions = names,
    }
    m.rebuild();
    set_pending(m, source, false);
    None
}

fn handle_load_failed(m: &mut Model, source: Source, err: String) -> Option<Effect> {
    match m.on_load_error {
        LoadFailurePolicy::Abort => {
            error!("loading {source} failed: {err}");
            m.err = Some(err);
            quit(m)
        }
        LoadFailurePolicy::Disable => {
            warn!("loading {source} failed, continuing without it: {err}");
            match source {
                Source::Layouts => m.layouts.clear(),
                Source::Sessions => m.sessions.clear(),
            }
            m.rebuild();
            m.status = Some(format!("Could not load {source}: {err}"));
            set_pending(m, source, false);
            None
        }
    }
}

fn quit(m: &mut Model) -> Option<Effect> {
    m.phase = Phase::Exiting;
    Some(Effect::Quit)
}

fn reload(m: &mut Model) -> Option<Effect> {
    info!("reloading layouts and sessions");
    m.layouts_pending = true;
    m.sessions_pending = true;
    m.phase = Phase::Loading;
    m.status = None;
    Some(Effect::Reload)
}

/// Maps an entry to the argument vector passed to the tool. The layout
/// placeholder has no command yet.
pub fn entry_args(tool: &str, entry: &Entry) -> Option<Vec<String>> {
    match entry {
        Entry::NewDefaultSession => Some(vec![tool.to_string()]),
        Entry::Session(name) => Some(vec![
            tool.to_string(),
            "attach".to_string(),
            name.to_string(),
        ]),
        Entry::Layout(name) => Some(vec![
            tool.to_string(),
            "--layout".to_string(),
            name.to_string(),
        ]),
        Entry::NewSessionWithLayout => None,
    }
}

fn handle_key_enter(m: &mut Model) -> Option<Effect> {
    let Some(selected) = m.selected() else {
        return None;
    };
    let Some(args) = entry_args(&m.tool, &selected) else {
        m.status = Some(format!(
            "No layouts found in {}",
            m.layouts_dir.display()
        ));
        return None;
    };
    match (m.resolve)(&m.tool) {
        Ok(program) => {
            info!("selected {:?}: {} {:?}", selected, program.display(), args);
            m.action = Some(Action { program, args });
            quit(m)
        }
        Err(e) => {
            error!("cannot start {}: {e}", m.tool);
            m.err = Some(e.to_string());
            m.fatal = true;
            quit(m)
        }
    }
}

fn handle_key_esc(m: &mut Model) -> Option<Effect> {
    if m.filtering || !m.filter.is_empty() {
        m.filtering = false;
        m.filter.clear();
        m.clamp_cursor();
    }
    None
}

fn handle_key_backspace(m: &mut Model) -> Option<Effect> {
    if m.filtering {
        m.filter.pop();
        m.cursor = 0;
    }
    None
}

fn move_cursor_up(m: &mut Model) -> Option<Effect> {
    m.cursor = m.cursor.saturating_sub(1);
    None
}

fn move_cursor_down(m: &mut Model) -> Option<Effect> {
    let total = m.visible_entries().len();
    if m.cursor + 1 < total {
        m.cursor += 1;
    }
    None
}

fn page_up(m: &mut Model) -> Option<Effect> {
    let page = m.page();
    if page > 0 {
        m.cursor = (page - 1) * m.per_page;
    } else {
        m.cursor = 0;
    }
    None
}

fn page_down(m: &mut Model) -> Option<Effect> {
    let page = m.page();
    if page + 1 < m.total_pages() {
        m.cursor = (page + 1) * m.per_page;
        m.clamp_cursor();
    }
    None
}

fn go_to_end(m: &mut Model) -> Option<Effect> {
    m.cursor = m.visible_entries().len().saturating_sub(1);
    None
}

fn handle_rune(m: &mut Model, r: char) -> Option<Effect> {
    if m.filtering {
        m.filter.push(r);
        m.cursor = 0;
        return None;
    }
    match r {
        'q' => quit(m),
        'r' => reload(m),
        '/' => {
            m.filtering = true;
            None
        }
        'k' => move_cursor_up(m),
        'j' => move_cursor_down(m),
        'h' => page_up(m),
        'l' => page_down(m),
        'g' => {
            m.cursor = 0;
            None
        }
        'G' => go_to_end(m),
        _ => None,
    }
}
