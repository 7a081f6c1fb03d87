use crate::Config;
use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::Command,
};

/// Name of the external program, expected next to the launcher binary.
#[cfg(not(windows))]
pub const POPUP_PROGRAM: &str = "ow-popup";
#[cfg(windows)]
pub const POPUP_PROGRAM: &str = "ow-popup.exe";

/// Builds the `ow-popup` invocation: the three configured flag/value pairs,
/// then `args` verbatim and in order. Nothing is interpreted or filtered.
#[must_use]
pub fn build_popup_command<T: AsRef<OsStr>>(
    program: &Path,
    config: &Config,
    args: &[T],
) -> Command {
    let mut command = Command::new(program);
    command.args(["--appid", config.appid]);
    command.args(["--lat", config.lat]);
    command.args(["--lon", config.lon]);
    command.args(args.iter().map(OsString::from));
    command
}

pub use os_specific::exec_command;

#[cfg(unix)]
mod os_specific {
    use anyhow::{Context, Result};
    use std::{convert::Infallible, os::unix::process::CommandExt, process::Command};

    /// Replaces the current process image with `command`. Returns only if
    /// the program could not be executed.
    pub fn exec_command(command: &mut Command) -> Result<Infallible> {
        let error = command.exec();
        Err(error).with_context(|| format!("failed to execute command: {command:?}"))
    }
}

#[cfg(windows)]
mod os_specific {
    use anyhow::{Context, Result};
    use std::{
        convert::Infallible,
        process::{Command, exit},
    };

    /// Process replacement is unavailable on Windows: run `command` to
    /// completion and exit with its status.
    pub fn exec_command(command: &mut Command) -> Result<Infallible> {
        let status = command
            .status()
            .with_context(|| format!("failed to execute command: {command:?}"))?;
        exit(status.code().unwrap_or(1));
    }
}
