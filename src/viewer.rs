use std::{path::Path, process::Command};

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy)]
pub struct Launcher {
    program: &'static str,
    arguments: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const LAUNCHERS: &[Launcher] = &[Launcher {
    program: "open",
    arguments: &[],
}];

// The empty string is the window title `start` expects before the file.
#[cfg(target_os = "windows")]
const LAUNCHERS: &[Launcher] = &[Launcher {
    program: "cmd",
    arguments: &["/C", "start", ""],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const LAUNCHERS: &[Launcher] = &[Launcher {
    program: "xdg-open",
    arguments: &[],
}];

/// Opens a file with whatever this platform uses for that kind of file.
///
/// Failing to open it is not an error for the caller: it gets logged and `false` comes back.
pub fn open_in_viewer(path: &Path) -> bool {
    open_with(LAUNCHERS, path)
}

fn open_with(launchers: &[Launcher], path: &Path) -> bool {
    match try_launchers(launchers, path) {
        Ok(()) => true,
        Err(error) => {
            log::warn!("Could not open the file automatically: {:?}", error);
            false
        }
    }
}

fn try_launchers(launchers: &[Launcher], path: &Path) -> Result<()> {
    for launcher in launchers.iter() {
        match launch(launcher, path) {
            Ok(()) => {
                log::debug!("Opened {} with {}", path.display(), launcher.program);
                return Ok(());
            }
            Err(error) => log::debug!("{:?}", error),
        }
    }

    bail!("No viewer could open {}.", path.display())
}

fn launch(launcher: &Launcher, path: &Path) -> Result<()> {
    let status = Command::new(launcher.program)
        .args(launcher.arguments)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to run {}.", launcher.program))?;

    if !status.success() {
        bail!("{} exited with {}.", launcher.program, status);
    }

    Ok(())
}
