//! Core library for combed frame range scanning and reporting.
//!
//! This crate turns a per-frame combing classification of a video clip
//! into contiguous flagged frame ranges and emits four synchronized
//! report payloads: a debug summary, a Python-literal range list, a raw
//! JSON frame index, and a chapter-marker file with wall-clock timecodes.
//!
//! Data flows one way: classifier → flagged frame indices →
//! [`build_ranges`] → [`RangeSet`] → [`render_reports`] → [`ReportSet`].
//! The range synthesis and timecode conversion are pure functions; the
//! external ffmpeg/ffprobe integration lives behind the
//! [`FrameClassifier`] trait and [`get_clip_info`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use combcheck_core::{
//!     DetectionMode, ScanConfig, SidecarClassifier, build_ranges,
//!     get_clip_info, render_reports, run_scan,
//! };
//! use std::path::Path;
//! use std::sync::atomic::AtomicBool;
//!
//! let input = Path::new("capture.mkv");
//! let clip = get_clip_info(input).unwrap();
//! let config = ScanConfig::default();
//! let cancel = AtomicBool::new(false);
//!
//! let outcome = run_scan(
//!     &SidecarClassifier::new(),
//!     input,
//!     &clip,
//!     &config,
//!     &cancel,
//!     &mut |_event| {},
//! )
//! .unwrap();
//!
//! let ranges = build_ranges(&outcome.flagged, config.threshold, config.min_range).unwrap();
//! let reports =
//!     render_reports(&ranges, &outcome.flagged, clip.frame_rate, config.mode).unwrap();
//! print!("{}", reports.debug_text);
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod ranges;
pub mod reporting;
pub mod scan;
pub mod timecode;

// Re-exports for public API
pub use config::{DetectionMode, ScanConfig};
pub use error::{CoreError, CoreResult};
pub use external::{
    ClassifierControl, FrameClassifier, SidecarClassifier, check_dependency, get_clip_info,
};
pub use ranges::{FrameRange, RangeSet, build_ranges};
pub use reporting::{ReportSet, render_reports};
pub use scan::{ClipInfo, ScanEvent, ScanOutcome, run_scan};
pub use timecode::{FrameRate, frame_to_timecode};
