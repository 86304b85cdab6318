//! Interactions with external command-line tools.
//!
//! The frame classifier and the clip prober are external collaborators:
//! the core consumes whatever `(frame, combed)` sequence and clip
//! properties they provide. The default implementations shell out to
//! ffmpeg (via `ffmpeg-sidecar`) and ffprobe (via the `ffprobe` crate);
//! the [`FrameClassifier`] trait keeps the seam open for tests and for
//! other detection backends.

use crate::error::{CoreError, CoreResult, command_start_error};
use std::io;
use std::process::{Command, Stdio};

pub mod ffmpeg_classifier;
pub mod ffprobe_executor;

pub use ffmpeg_classifier::{ClassifierControl, FrameClassifier, SidecarClassifier};
pub use ffprobe_executor::get_clip_info;

/// Checks that a required external command is available and executable.
///
/// Runs `<cmd> -version` with all output discarded. Returns
/// `DependencyNotFound` when the binary is missing from PATH.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    log::debug!("Checking for external dependency: {cmd_name}");
    let status = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(CoreError::DependencyNotFound(format!(
            "'{cmd_name} -version' exited with {status}"
        ))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => Err(command_start_error(cmd_name, e)),
    }
}
