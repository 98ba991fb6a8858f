use crate::error::{Error, Result};
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Captured result of running an external command to completion.
#[derive(Debug, Clone)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
}

pub fn resolve_binary(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|source| Error::BinaryNotFound {
        name: name.to_string(),
        source,
    })
}

fn describe(path: &Path, args: &[&str]) -> String {
    let mut parts = vec![path.display().to_string()];
    parts.extend(args.iter().map(|a| a.to_string()));
    parts.join(" ")
}

// Spawn `path args...`, read stdout until EOF, then wait for exit.
pub fn run(path: &Path, args: &[&str]) -> Result<Output> {
    let spawn_err = |source| Error::ProcessSpawn {
        program: describe(path, args),
        source,
    };
    let mut child = Command::new(path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_err)?;

    let mut raw = Vec::new();
    if let Some(mut stdout) = child.stdout.take() {
        stdout.read_to_end(&mut raw).map_err(spawn_err)?;
    }
    let status = child.wait().map_err(spawn_err)?;
    Ok(Output {
        status,
        stdout: String::from_utf8_lossy(&raw).to_string(),
    })
}

/// Runs `<path> list-sessions` and returns its stdout.
///
/// The multiplexer exits non-zero when no session is running, so a failed
/// exit status yields empty output instead of an error.
pub fn list_sessions(path: &Path) -> Result<String> {
    let out = run(path, &["list-sessions"])?;
    if !out.status.success() {
        debug!(
            "{} list-sessions exited with {}; treating as no sessions",
            path.display(),
            out.status
        );
        return Ok(String::new());
    }
    Ok(out.stdout)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn resolve_binary_reports_missing_tool() {
        let err = resolve_binary("zpick-definitely-not-installed").unwrap_err();
        assert!(matches!(err, Error::BinaryNotFound { ref name, .. } if name == "zpick-definitely-not-installed"));
    }

    #[test]
    fn run_captures_stdout() {
        let sh = resolve_binary("sh").unwrap();
        let out = run(&sh, &["-c", "printf 'work\\npersonal\\n'"]).unwrap();
        assert!(out.status.success());
        assert_eq!(out.stdout, "work\npersonal\n");
    }

    #[test]
    fn run_reports_spawn_failure() {
        let err = run(Path::new("/nonexistent/zpick-tool"), &["list-sessions"]).unwrap_err();
        match err {
            Error::ProcessSpawn { program, .. } => {
                assert_eq!(program, "/nonexistent/zpick-tool list-sessions")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn list_sessions_treats_nonzero_exit_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("fake-mux");
        std::fs::write(&tool, "#!/bin/sh\necho 'No active sessions' \nexit 1\n").unwrap();
        make_executable(&tool);
        assert_eq!(list_sessions(&tool).unwrap(), "");
    }

    #[test]
    fn list_sessions_passes_subcommand() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("fake-mux");
        std::fs::write(&tool, "#!/bin/sh\necho \"$1\"\n").unwrap();
        make_executable(&tool);
        assert_eq!(list_sessions(&tool).unwrap(), "list-sessions\n");
    }

    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).unwrap();
    }
}
