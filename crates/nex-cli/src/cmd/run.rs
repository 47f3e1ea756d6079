//! Run command

use anyhow::Result;
use nex_core::Context;
use nex_core::ops::{self, run::split_command_args};

/// Run a package command and return the child's exit code.
///
/// `rest` is everything after the package name: an optional command name
/// followed by the arguments forwarded to it.
pub async fn run(ctx: &Context, package: &str, rest: &[String]) -> Result<i32> {
    let (command, args) = split_command_args(rest);
    let code = ops::execute(ctx, package, &command, &args).await?;
    if code != 0 {
        tracing::debug!("{package} {command} exited with {code}");
    }
    Ok(code)
}

/// Map a child exit code onto the byte nex itself exits with.
///
/// Codes outside `0..=255` (negative NTSTATUS values on Windows, for one)
/// become 1 so a crashed child never reads as success.
pub fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_byte() {
        assert_eq!(exit_byte(0), 0);
        assert_eq!(exit_byte(4), 4);
        assert_eq!(exit_byte(255), 255);
        assert_eq!(exit_byte(-1_073_741_819), 1);
        assert_eq!(exit_byte(256), 1);
    }
}
