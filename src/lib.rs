use anyhow::{Context, Result, bail};
use log::debug;
use std::{convert::Infallible, env::current_exe, ffi::OsStr, path::PathBuf};

mod command;
pub use command::{POPUP_PROGRAM, build_popup_command, exec_command};

/// Values passed to `ow-popup` on every invocation. Edit them in place
/// before building; there is no environment or file based configuration.
pub struct Config {
    /// OpenWeatherMap API key.
    pub appid: &'static str,
    /// GPS latitude, -90..90.
    pub lat: &'static str,
    /// GPS longitude, -180..180.
    pub lon: &'static str,
}

pub const CONFIG: Config = Config {
    appid: "paste-your-api-key-here",
    lat: "48.8583701",
    lon: "2.2944813",
};

/// Launches `ow-popup` from the directory containing the current executable,
/// forwarding `args` after the configured flags. On success the child's exit
/// status becomes this process's exit status, so this function returns only
/// if the program could not be started.
pub fn run<T: AsRef<OsStr>>(args: &[T]) -> Result<Infallible> {
    env_logger::try_init().unwrap_or_default();
    let program = popup_path()?;
    let mut command = build_popup_command(&program, &CONFIG, args);
    debug!("{command:?}");
    exec_command(&mut command)
}

/// Path of the external program, resolved next to the current executable.
pub fn popup_path() -> Result<PathBuf> {
    let current_exe = current_exe().context("failed to resolve current executable")?;
    let Some(dir) = current_exe.parent() else {
        bail!(
            "failed to get parent directory of `{}`",
            current_exe.display()
        );
    };
    Ok(dir.join(POPUP_PROGRAM))
}
