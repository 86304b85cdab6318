//! Frame index to wall-clock timecode conversion.
//!
//! Conversion keeps the frame rate in rational form and works in integer
//! arithmetic throughout, so long clips do not accumulate floating-point
//! error. Milliseconds are floored, never rounded to nearest.

use crate::error::{CoreError, CoreResult};

/// Rational frame rate as reported by the container (e.g. 24000/1001).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    pub numerator: i64,
    pub denominator: i64,
}

impl FrameRate {
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl std::fmt::Display for FrameRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Converts a frame index to a zero-padded `HH:MM:SS.mmm` timecode.
///
/// Elapsed milliseconds are `frame * 1000 * denominator / numerator`,
/// floored at the millisecond boundary. Hours grow past two digits for
/// very long content; minutes, seconds and milliseconds stay fixed-width.
pub fn frame_to_timecode(frame: u64, rate: FrameRate) -> CoreResult<String> {
    if rate.numerator <= 0 {
        return Err(CoreError::InvalidRate(format!(
            "frame rate numerator must be positive, got {rate}"
        )));
    }
    if rate.denominator <= 0 {
        return Err(CoreError::InvalidRate(format!(
            "frame rate denominator must be positive, got {rate}"
        )));
    }

    // u128 keeps frame * 1000 * denominator from overflowing for any
    // realistic clip length.
    let total_ms =
        (u128::from(frame) * 1000 * rate.denominator as u128) / rate.numerator as u128;

    let (total_seconds, ms) = (total_ms / 1000, total_ms % 1000);
    let (total_minutes, secs) = (total_seconds / 60, total_seconds % 60);
    let (hours, mins) = (total_minutes / 60, total_minutes % 60);

    Ok(format!("{hours:02}:{mins:02}:{secs:02}.{ms:03}"))
}
