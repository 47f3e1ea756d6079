//! Spawning shell invocations.

use crate::{NexError, Result};
use std::path::Path;
use tokio::process::Command;

/// A command that runs `script` through the platform shell
/// (`sh -c` on POSIX, `cmd /C` on Windows).
pub fn shell_command(script: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(script);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script);
        cmd
    }
}

/// Run `script` with inherited stdio and wait for it.
///
/// Returns the exit code; a child killed by a signal counts as `1`.
///
/// # Errors
///
/// Returns [`NexError::Io`] if the shell cannot be spawned.
pub async fn run_shell(script: &str, cwd: Option<&Path>) -> Result<i32> {
    tracing::debug!("Spawning shell: {script}");
    let mut cmd = shell_command(script);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    let status = cmd
        .status()
        .await
        .map_err(|e| NexError::io("Failed to spawn shell", cwd.unwrap_or(Path::new(".")), e))?;
    let code = status.code().unwrap_or(1);
    tracing::debug!("Shell exited with {code}");
    Ok(code)
}
