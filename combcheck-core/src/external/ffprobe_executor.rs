//! FFprobe integration for clip property extraction.
//!
//! The scan needs two things from the container: the frame count (to size
//! the progress display and the duplication remap) and the rational frame
//! rate (for chapter timecodes). Both come from the first video stream
//! via the `ffprobe` crate.

use crate::error::{CoreError, CoreResult};
use crate::scan::ClipInfo;
use crate::timecode::FrameRate;
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Parses an ffprobe rational like "24000/1001" or "25/1".
fn parse_frame_rate(raw: &str) -> CoreResult<FrameRate> {
    let (num, den) = raw.split_once('/').ok_or_else(|| {
        CoreError::FfprobeParse(format!("frame rate '{raw}' is not of the form num/den"))
    })?;
    let numerator: i64 = num.trim().parse().map_err(|_| {
        CoreError::FfprobeParse(format!("frame rate numerator '{num}' is not an integer"))
    })?;
    let denominator: i64 = den.trim().parse().map_err(|_| {
        CoreError::FfprobeParse(format!("frame rate denominator '{den}' is not an integer"))
    })?;
    if numerator <= 0 || denominator <= 0 {
        return Err(CoreError::InvalidRate(format!(
            "frame rate '{raw}' is not positive"
        )));
    }
    Ok(FrameRate::new(numerator, denominator))
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    CoreError::FfprobeParse(format!("ffprobe failed for {context}: {err:?}"))
}

/// Probes a clip for its frame count and frame rate.
///
/// The frame count prefers the stream's `nb_frames`; containers that do
/// not carry it (e.g. raw transport streams) fall back to
/// `duration * fps`, floored.
pub fn get_clip_info(input_path: &Path) -> CoreResult<ClipInfo> {
    log::debug!(
        "Running ffprobe (via crate) for clip info on: {}",
        input_path.display()
    );

    let metadata =
        ffprobe(input_path).map_err(|err| map_ffprobe_error(err, "clip info"))?;

    let video_stream = metadata
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| {
            CoreError::VideoInfoError(format!(
                "No video stream found in {}",
                input_path.display()
            ))
        })?;

    // r_frame_rate is the container's base rate; avg_frame_rate is the
    // fallback for streams that report "0/0" there.
    let frame_rate = parse_frame_rate(&video_stream.r_frame_rate)
        .or_else(|_| parse_frame_rate(&video_stream.avg_frame_rate))?;

    let frame_count = match video_stream
        .nb_frames
        .as_deref()
        .and_then(|n| n.parse::<u64>().ok())
    {
        Some(count) => count,
        None => {
            let duration = video_stream
                .duration
                .as_deref()
                .or(metadata.format.duration.as_deref())
                .and_then(|d| d.parse::<f64>().ok())
                .ok_or_else(|| {
                    CoreError::FfprobeParse(format!(
                        "Neither nb_frames nor duration available for {}",
                        input_path.display()
                    ))
                })?;
            let fps = frame_rate.numerator as f64 / frame_rate.denominator as f64;
            (duration * fps).floor() as u64
        }
    };

    log::debug!(
        "Clip info for {}: {} frames at {}",
        input_path.display(),
        frame_count,
        frame_rate
    );

    Ok(ClipInfo {
        frame_count,
        frame_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_rate_rationals() {
        assert_eq!(
            parse_frame_rate("24000/1001").unwrap(),
            FrameRate::new(24000, 1001)
        );
        assert_eq!(parse_frame_rate("25/1").unwrap(), FrameRate::new(25, 1));
    }

    #[test]
    fn test_parse_frame_rate_rejects_garbage() {
        assert!(parse_frame_rate("25").is_err());
        assert!(parse_frame_rate("abc/def").is_err());
        assert!(parse_frame_rate("0/0").is_err());
        assert!(parse_frame_rate("-24/1").is_err());
    }
}
