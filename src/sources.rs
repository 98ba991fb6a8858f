//! Loaders for the two data sources shown in the picker: saved layouts on
//! disk and sessions reported by the running multiplexer.

use crate::error::{Error, Result};
use crate::process;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

pub const LAYOUT_EXTENSION: &str = ".kdl";

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("valid ANSI pattern"));

/// Base configuration directory: `$XDG_CONFIG_HOME`, else `$HOME/.config`.
pub fn config_base(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|s| !s.is_empty()) {
        return Some(PathBuf::from(xdg));
    }
    home.filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .map(|h| h.join(".config"))
}

/// `<config base>/<tool>/layouts`, read from the process environment.
pub fn default_layouts_dir(tool: &str) -> PathBuf {
    let base = config_base(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
    .unwrap_or_else(|| PathBuf::from(".config"));
    base.join(tool).join("layouts")
}

pub fn layout_name(file_name: &str) -> String {
    file_name
        .strip_suffix(LAYOUT_EXTENSION)
        .unwrap_or(file_name)
        .to_string()
}

/// Lists layout names in `dir`, ordered by file name.
pub fn load_layouts(dir: &Path) -> Result<Vec<String>> {
    let read_err = |source| Error::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    names.sort();
    let layouts: Vec<String> = names.iter().map(|n| layout_name(n)).collect();
    debug!("loaded {} layouts from {}", layouts.len(), dir.display());
    Ok(layouts)
}

/// Splits `list-sessions` output into session names, dropping empty lines.
pub fn parse_sessions(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|l| ANSI_ESCAPE.replace_all(l, "").to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn fetch_sessions(tool: &str) -> Result<Vec<String>> {
    let bin = process::resolve_binary(tool)?;
    let output = process::list_sessions(&bin)?;
    let sessions = parse_sessions(&output);
    debug!("{tool} reported {} sessions", sessions.len());
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_base_prefers_xdg() {
        let base = config_base(Some("/xdg".to_string()), Some("/home/u".to_string()));
        assert_eq!(base, Some(PathBuf::from("/xdg")));
    }

    #[test]
    fn config_base_falls_back_to_home() {
        let base = config_base(None, Some("/home/u".to_string()));
        assert_eq!(base, Some(PathBuf::from("/home/u/.config")));
        let base = config_base(Some(String::new()), Some("/home/u".to_string()));
        assert_eq!(base, Some(PathBuf::from("/home/u/.config")));
    }

    #[test]
    fn layout_name_strips_only_known_suffix() {
        assert_eq!(layout_name("dev.kdl"), "dev");
        assert_eq!(layout_name("notes.txt"), "notes.txt");
        assert_eq!(layout_name("kdl"), "kdl");
        assert_eq!(layout_name("compact.swap.kdl"), "compact.swap");
    }

    #[test]
    fn load_layouts_lists_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["foo.kdl", "bar.kdl", "baz.txt"] {
            fs::write(dir.path().join(name), "layout {}").unwrap();
        }
        let layouts = load_layouts(dir.path()).unwrap();
        assert_eq!(layouts, vec!["bar", "baz.txt", "foo"]);
    }

    #[test]
    fn load_layouts_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_layouts(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn load_layouts_missing_directory_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("zellij").join("layouts");
        match load_layouts(&missing) {
            Err(Error::DirectoryRead { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected DirectoryRead, got {other:?}"),
        }
    }

    #[test]
    fn parse_sessions_drops_empty_lines() {
        assert_eq!(parse_sessions("work\npersonal\n\n"), vec!["work", "personal"]);
        assert!(parse_sessions("").is_empty());
    }

    #[test]
    fn parse_sessions_strips_colour() {
        let out = "\x1b[32;1mwork\x1b[m\r\nplay\n";
        assert_eq!(parse_sessions(out), vec!["work", "play"]);
    }

    #[test]
    fn fetch_sessions_missing_binary_is_failure() {
        let err = fetch_sessions("zpick-definitely-not-installed").unwrap_err();
        assert!(matches!(err, Error::BinaryNotFound { .. }));
    }
}
