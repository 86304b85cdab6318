//! Combing classification via an ffmpeg `idet` pass.
//!
//! The classifier runs
//! `ffmpeg -hide_banner -i INPUT -vf idet,metadata=mode=print -f null -`
//! and scrapes the metadata filter's log output. The filter announces each
//! frame with a `frame:N pts:... pts_time:...` line and then prints the
//! idet keys attached to it; `lavfi.idet.multiple.current_frame` carries
//! the per-frame interlacing verdict (`tff`/`bff` mean combed,
//! `progressive`/`undetermined` mean clean).

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::path::Path;

/// Flow control returned by a classification handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierControl {
    /// Keep streaming frames.
    Continue,
    /// Stop the classifier; the frames seen so far are the result.
    Stop,
}

/// A source of per-frame combing classifications.
///
/// Implementations stream `(frame_index, combed)` pairs in decode order.
/// The handler may stop the stream early (cancellation); that is not an
/// error and the classifier must return `Ok`.
pub trait FrameClassifier {
    fn classify(
        &self,
        input: &Path,
        handler: &mut dyn FnMut(u64, bool) -> CoreResult<ClassifierControl>,
    ) -> CoreResult<()>;
}

/// Extracts the frame number from a metadata filter announcement line.
fn parse_frame_marker(line: &str) -> Option<u64> {
    // "[Parsed_metadata_1 @ 0x...] frame:12   pts:12012  pts_time:0.5"
    let rest = line.split("frame:").nth(1)?;
    rest.split_whitespace().next()?.parse().ok()
}

/// Extracts the combed verdict from an idet metadata line, if present.
fn parse_combed_flag(line: &str) -> Option<bool> {
    let rest = line.split("lavfi.idet.multiple.current_frame=").nth(1)?;
    let value = rest.split_whitespace().next().unwrap_or("");
    match value {
        "tff" | "bff" => Some(true),
        "progressive" | "undetermined" => Some(false),
        _ => None,
    }
}

/// Default classifier implementation driving ffmpeg through `ffmpeg-sidecar`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarClassifier;

impl SidecarClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FrameClassifier for SidecarClassifier {
    fn classify(
        &self,
        input: &Path,
        handler: &mut dyn FnMut(u64, bool) -> CoreResult<ClassifierControl>,
    ) -> CoreResult<()> {
        log::debug!(
            "Running ffmpeg (sidecar) idet classification on {}",
            input.display()
        );

        let mut cmd = FfmpegCommand::new();
        cmd.hide_banner()
            .input(input.to_string_lossy().into_owned())
            .args(["-vf", "idet,metadata=mode=print"])
            .format("null")
            .output("-");

        let mut child = cmd
            .spawn()
            .map_err(|e| command_start_error("ffmpeg", e))?;

        let mut current_frame: Option<u64> = None;
        let mut stopped = false;
        let mut error_lines = String::new();

        let iterator = child.iter().map_err(|e| {
            command_failed_error(
                "ffmpeg",
                std::process::ExitStatus::default(),
                e.to_string(),
            )
        })?;

        for event in iterator {
            match event {
                FfmpegEvent::Log(_, line) => {
                    if let Some(frame) = parse_frame_marker(&line) {
                        current_frame = Some(frame);
                    } else if let Some(combed) = parse_combed_flag(&line) {
                        if let Some(frame) = current_frame.take() {
                            if handler(frame, combed)? == ClassifierControl::Stop {
                                stopped = true;
                                let _ = child.quit();
                                break;
                            }
                        }
                    }
                }
                FfmpegEvent::Error(line) => {
                    error_lines.push_str(&line);
                    error_lines.push('\n');
                }
                _ => {}
            }
        }

        let status = child
            .wait()
            .map_err(|e| command_wait_error("ffmpeg", e))?;
        if !status.success() && !stopped {
            return Err(command_failed_error("ffmpeg", status, error_lines));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_marker() {
        assert_eq!(
            parse_frame_marker(
                "[Parsed_metadata_1 @ 0x5650] frame:0    pts:0       pts_time:0"
            ),
            Some(0)
        );
        assert_eq!(
            parse_frame_marker(
                "[Parsed_metadata_1 @ 0x5650] frame:1234 pts:1235234 pts_time:51.5"
            ),
            Some(1234)
        );
        // Progress lines use "frame=" and must not match.
        assert_eq!(parse_frame_marker("frame=  100 fps= 25 q=-0.0"), None);
        assert_eq!(parse_frame_marker("random log line"), None);
    }

    #[test]
    fn test_parse_combed_flag() {
        let prefix = "[Parsed_metadata_1 @ 0x5650] ";
        assert_eq!(
            parse_combed_flag(&format!(
                "{prefix}lavfi.idet.multiple.current_frame=tff"
            )),
            Some(true)
        );
        assert_eq!(
            parse_combed_flag(&format!(
                "{prefix}lavfi.idet.multiple.current_frame=bff"
            )),
            Some(true)
        );
        assert_eq!(
            parse_combed_flag(&format!(
                "{prefix}lavfi.idet.multiple.current_frame=progressive"
            )),
            Some(false)
        );
        assert_eq!(
            parse_combed_flag(&format!(
                "{prefix}lavfi.idet.multiple.current_frame=undetermined"
            )),
            Some(false)
        );
        // Other idet keys must not be mistaken for the verdict.
        assert_eq!(
            parse_combed_flag(&format!(
                "{prefix}lavfi.idet.single.current_frame=tff"
            )),
            None
        );
        assert_eq!(parse_combed_flag("frame:0 pts:0 pts_time:0"), None);
    }
}
