//! Hands the terminal over to the chosen multiplexer command.

use crate::error::{Error, Result};
use crate::ui::Action;
use std::process::Command;

// shell_single_quote safely single-quotes s for embedding in POSIX shells.
fn shell_single_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./=:@".contains(c))
    {
        return s.to_string();
    }
    let escaped = s.replace('\'', "'\\''");
    format!("'{escaped}'")
}

/// Human readable command line for an action, with argv[0] replaced by the
/// resolved program path.
pub fn command_line(action: &Action) -> String {
    let mut parts = vec![shell_single_quote(&action.program.to_string_lossy())];
    parts.extend(action.args.iter().skip(1).map(|a| shell_single_quote(a)));
    parts.join(" ")
}

fn command(action: &Action) -> Command {
    let mut cmd = Command::new(&action.program);
    cmd.args(action.args.iter().skip(1));
    cmd
}

/// Replaces the current process image with the action's command. Only returns
/// on failure.
#[cfg(unix)]
pub fn handoff(action: &Action) -> Result<i32> {
    use std::os::unix::process::CommandExt;

    let mut cmd = command(action);
    if let Some(arg0) = action.args.first() {
        cmd.arg0(arg0);
    }
    let source = cmd.exec();
    Err(Error::Exec {
        program: action.program.clone(),
        source,
    })
}

/// Runs the action's command in the foreground and returns its exit code.
#[cfg(not(unix))]
pub fn handoff(action: &Action) -> Result<i32> {
    use std::process::Stdio;

    let status = command(action)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::Exec {
            program: action.program.clone(),
            source,
        })?;
    Ok(status.code().unwrap_or(0))
}
