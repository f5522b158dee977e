//! Writing finished textures into the game's folders.
//!
//! Saving encodes first and only then touches the disk, so a failed encode
//! never leaves a partial file behind. Opening a folder in the system file
//! browser is best effort: the folder is created (which may fail), but a
//! browser that refuses to launch is only reported.

use crate::decode::DecodedImage;
use crate::encode::{encode_image_png, EncodeError};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Errors from saving or preparing output folders.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Creating a directory or writing a file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The texture could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl ExportError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// File name for a texture saved at `timestamp`: `Art_YYYYMMDD_HHMMSS.png`.
pub fn art_file_name(timestamp: NaiveDateTime) -> String {
    format!("Art_{}.png", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Save `image` as PNG into `dir`, named after the current local time.
///
/// Returns the path of the written file.
pub fn save_latte_art(image: &DecodedImage, dir: &Path) -> Result<PathBuf, ExportError> {
    save_latte_art_at(image, dir, Local::now().naive_local())
}

/// Save `image` as PNG into `dir`, named after `timestamp`.
///
/// `dir` and its parents are created if missing. An existing file with the
/// same name is overwritten.
pub fn save_latte_art_at(
    image: &DecodedImage,
    dir: &Path,
    timestamp: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    let png = encode_image_png(image)?;

    fs::create_dir_all(dir).map_err(ExportError::io(dir))?;

    let path = dir.join(art_file_name(timestamp));
    fs::write(&path, png).map_err(ExportError::io(&path))?;

    log::info!("Saved latte art to {}", path.display());
    Ok(path)
}

/// Something that can show a folder to the user.
pub trait FolderOpener {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Opens folders with the platform file browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn program() -> &'static str {
        if cfg!(windows) {
            "explorer"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

impl FolderOpener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let mut command = Command::new(Self::program());
        command.arg(path);

        // explorer exits with 1 even after opening the window
        if cfg!(windows) {
            return command.spawn().map(|_| ());
        }

        check_exit(Self::program(), command.status()?)
    }
}

/// Map a non-zero exit of the file browser launcher to an error.
fn check_exit(program: &str, status: ExitStatus) -> io::Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{program} exited with {status}")))
    }
}

/// Result of [`ensure_and_open`] once the folder exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The file browser was launched.
    Opened,
    /// The folder exists but the file browser could not be launched.
    LaunchFailed(String),
}

/// Create `path` if needed and show it in the system file browser.
pub fn ensure_and_open(path: &Path) -> Result<OpenOutcome, ExportError> {
    ensure_and_open_with(path, &SystemOpener)
}

/// [`ensure_and_open`] with a custom opener.
///
/// # Errors
///
/// Returns `ExportError::Io` only if the directory cannot be created. A
/// failing opener yields `Ok(OpenOutcome::LaunchFailed)`.
pub fn ensure_and_open_with(
    path: &Path,
    opener: &dyn FolderOpener,
) -> Result<OpenOutcome, ExportError> {
    fs::create_dir_all(path).map_err(ExportError::io(path))?;

    match opener.open(path) {
        Ok(()) => Ok(OpenOutcome::Opened),
        Err(e) => {
            log::warn!("Could not open {} in file browser: {}", path.display(), e);
            Ok(OpenOutcome::LaunchFailed(e.to_string()))
        }
    }
}
