use crate::config::Config;
use crate::error::{Error, Result};
use crate::sources;
use crate::ui::model::{initial_model, Model, Source};
use crate::ui::update::Effect;
use crate::ui::Msg;
use bubbletea_rs::{
    command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel, Program,
};
use crossterm::event::{KeyCode, KeyModifiers};
use log::{debug, info};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

// bubbletea-rs builds the model through a constructor without arguments, so the
// configuration is parked here before the program starts.
static CONFIG: OnceCell<Config> = OnceCell::new();

fn deliver(msg: Msg) -> Option<bubbletea_rs::event::Msg> {
    Some(Box::new(msg) as bubbletea_rs::event::Msg)
}

fn failure(source: Source, err: String) -> Msg {
    Msg::LoadFailed { source, error: err }
}

/// Lists layouts off the input thread and reports back as a message.
pub fn load_layouts_cmd(dir: PathBuf) -> Cmd {
    Box::pin(async move {
        debug!("loading layouts from {}", dir.display());
        let msg = match tokio::task::spawn_blocking(move || sources::load_layouts(&dir)).await {
            Ok(Ok(layouts)) => Msg::LayoutsLoaded(layouts),
            Ok(Err(e)) => failure(Source::Layouts, e.to_string()),
            Err(e) => failure(Source::Layouts, e.to_string()),
        };
        deliver(msg)
    })
}

/// Asks the multiplexer for its sessions off the input thread.
pub fn fetch_sessions_cmd(tool: String) -> Cmd {
    Box::pin(async move {
        debug!("fetching sessions from {tool}");
        let msg = match tokio::task::spawn_blocking(move || sources::fetch_sessions(&tool)).await {
            Ok(Ok(sessions)) => Msg::SessionsLoaded(sessions),
            Ok(Err(e)) => failure(Source::Sessions, e.to_string()),
            Err(e) => failure(Source::Sessions, e.to_string()),
        };
        deliver(msg)
    })
}

/// One loader command per source.
pub fn reload_cmds(m: &Model) -> Vec<Cmd> {
    vec![
        load_layouts_cmd(m.layouts_dir.clone()),
        fetch_sessions_cmd(m.tool.clone()),
    ]
}

pub fn reload_cmd(m: &Model) -> Cmd {
    bubbletea_rs::batch(reload_cmds(m))
}

// Translate a terminal key event into a picker message.
pub fn key_to_msg(key: &KeyCode, modifiers: KeyModifiers) -> Option<Msg> {
    match key {
        KeyCode::Enter => Some(Msg::KeyEnter),
        KeyCode::Esc => Some(Msg::KeyEsc),
        KeyCode::Backspace => Some(Msg::KeyBackspace),
        KeyCode::Up => Some(Msg::KeyUp),
        KeyCode::Down => Some(Msg::KeyDown),
        KeyCode::Left | KeyCode::PageUp => Some(Msg::KeyPageUp),
        KeyCode::Right | KeyCode::PageDown => Some(Msg::KeyPageDown),
        KeyCode::Home => Some(Msg::KeyHome),
        KeyCode::End => Some(Msg::KeyEnd),
        // Ctrl-C delivered as ETX
        KeyCode::Char('\u{03}') => Some(Msg::Interrupt),
        KeyCode::Char(ch) if modifiers.contains(KeyModifiers::CONTROL) => {
            match ch.to_ascii_lowercase() {
                'c' => Some(Msg::Interrupt),
                'n' => Some(Msg::KeyDown),
                'p' => Some(Msg::KeyUp),
                _ => None,
            }
        }
        KeyCode::Char(ch) => Some(Msg::Rune(*ch)),
        _ => None,
    }
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
pub struct TeaAdapter {
    pub inner: Model,
}

impl TeaAdapter {
    fn apply(&mut self, msg: Msg) -> Option<Cmd> {
        match self.inner.update(msg)? {
            Effect::Quit => Some(bubbletea_rs::quit()),
            Effect::Reload => Some(reload_cmd(&self.inner)),
        }
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let config = CONFIG.get_or_init(Config::default);
        let mut adapter = TeaAdapter {
            inner: initial_model(config),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        let cmd = bubbletea_rs::batch(vec![
            reload_cmd(&adapter.inner),
            bubbletea_rs::window_size(),
        ]);
        (adapter, Some(cmd))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        // our own messages come back from the loader commands
        let msg = match msg.downcast::<Msg>() {
            Ok(own) => return self.apply(*own),
            Err(other) => other,
        };
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            let translated = key_to_msg(&km.key, km.modifiers)?;
            return self.apply(translated);
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            return self.apply(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Runs the interactive picker until it exits and returns the final model.
/// The terminal is restored when this returns.
pub async fn run(config: Config) -> Result<Model> {
    info!(
        "starting picker: tool={} layouts={} on_load_error={:?}",
        config.tool,
        config.layouts_dir.display(),
        config.on_load_error
    );
    if CONFIG.set(config).is_err() {
        return Err(Error::Program("picker already started".to_string()));
    }
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| Error::Program(format!("failed to build program: {e:?}")))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| Error::Program(format!("{e:?}")))?;
    Ok(final_adapter.inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoadFailurePolicy;
    use crate::ui::model::Phase;
    use std::any::Any;

    const MISSING_TOOL: &str = "zpick-definitely-not-installed";

    fn adapter(layouts_dir: PathBuf) -> TeaAdapter {
        let config = Config {
            tool: MISSING_TOOL.to_string(),
            layouts_dir,
            on_load_error: LoadFailurePolicy::Disable,
            print_only: false,
        };
        TeaAdapter {
            inner: initial_model(&config),
        }
    }

    fn unwrap_msg(msg: Option<bubbletea_rs::event::Msg>) -> Msg {
        let boxed: Box<dyn Any + Send> = msg.expect("command produced a message");
        *boxed.downcast::<Msg>().expect("picker message")
    }

    #[test]
    fn keys_map_to_messages() {
        let none = KeyModifiers::NONE;
        assert_eq!(key_to_msg(&KeyCode::Enter, none), Some(Msg::KeyEnter));
        assert_eq!(key_to_msg(&KeyCode::Char('q'), none), Some(Msg::Rune('q')));
        assert_eq!(
            key_to_msg(&KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Msg::Interrupt)
        );
        assert_eq!(key_to_msg(&KeyCode::Char('\u{03}'), none), Some(Msg::Interrupt));
        assert_eq!(
            key_to_msg(&KeyCode::Char('n'), KeyModifiers::CONTROL),
            Some(Msg::KeyDown)
        );
        assert_eq!(key_to_msg(&KeyCode::PageDown, none), Some(Msg::KeyPageDown));
        assert_eq!(key_to_msg(&KeyCode::Tab, none), None);
    }

    #[tokio::test]
    async fn layout_command_reports_layouts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dev.kdl"), "layout {}").unwrap();
        let msg = unwrap_msg(load_layouts_cmd(dir.path().to_path_buf()).await);
        assert_eq!(msg, Msg::LayoutsLoaded(vec!["dev".to_string()]));
    }

    #[tokio::test]
    async fn layout_command_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        match unwrap_msg(load_layouts_cmd(missing).await) {
            Msg::LoadFailed { source, error } => {
                assert_eq!(source, Source::Layouts);
                assert!(error.contains("missing"), "{error}");
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[tokio::test]
    async fn session_command_reports_missing_binary() {
        let cmd = fetch_sessions_cmd("zpick-definitely-not-installed".to_string());
        match unwrap_msg(cmd.await) {
            Msg::LoadFailed { source, .. } => assert_eq!(source, Source::Sessions),
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[tokio::test]
    async fn reload_dispatches_both_loaders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dev.kdl"), "layout {}").unwrap();
        let a = adapter(dir.path().to_path_buf());

        let mut layouts = None;
        let mut sessions_failed = false;
        for cmd in reload_cmds(&a.inner) {
            match unwrap_msg(cmd.await) {
                Msg::LayoutsLoaded(names) => layouts = Some(names),
                Msg::LoadFailed { source, .. } => {
                    assert_eq!(source, Source::Sessions);
                    sessions_failed = true;
                }
                other => panic!("unexpected message {other:?}"),
            }
        }
        assert_eq!(layouts, Some(vec!["dev".to_string()]));
        assert!(sessions_failed);
    }

    #[tokio::test]
    async fn adapter_routes_loader_results_into_model() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dev.kdl"), "layout {}").unwrap();
        let mut a = adapter(dir.path().to_path_buf());

        for cmd in reload_cmds(&a.inner) {
            let msg = cmd.await.expect("command produced a message");
            assert!(a.update(msg).is_none());
        }
        assert_eq!(a.inner.layouts, vec!["dev".to_string()]);
        assert!(a.inner.sessions.is_empty());
        assert_eq!(a.inner.phase, Phase::Ready);
        assert!(a.inner.status.as_deref().unwrap_or("").contains("sessions"));

        // unknown messages leave the model alone
        assert!(a.update(Box::new(42u32)).is_none());
        assert_eq!(a.inner.phase, Phase::Ready);
    }

    #[tokio::test]
    async fn reload_key_marks_both_sources_pending() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = adapter(dir.path().to_path_buf());
        a.update(Box::new(Msg::LayoutsLoaded(vec![])));
        a.update(Box::new(Msg::SessionsLoaded(vec![])));
        assert_eq!(a.inner.phase, Phase::Ready);

        assert!(a.update(Box::new(Msg::Rune('r'))).is_some());
        assert!(a.inner.layouts_pending);
        assert!(a.inner.sessions_pending);
        assert_eq!(a.inner.phase, Phase::Loading);
    }
}
