//! Scan orchestration: driving the classifier and collecting flagged frames.
//!
//! The orchestrator owns no detection logic of its own. It streams
//! per-frame classifications from a [`FrameClassifier`], applies the
//! frame-duplication remap and inverse mode, and accumulates the flagged
//! virtual frame indices. Cancellation is cooperative: a shared flag is
//! checked between frames and a cancelled scan simply returns the prefix
//! accumulated so far, which is a valid flagged sequence in its own right.

use crate::config::{DetectionMode, ScanConfig};
use crate::error::CoreResult;
use crate::external::{ClassifierControl, FrameClassifier};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Basic clip properties the scan needs from the prober.
#[derive(Debug, Clone, Copy)]
pub struct ClipInfo {
    /// Number of frames in the source clip (before any duplication).
    pub frame_count: u64,
    /// Container frame rate in rational form.
    pub frame_rate: crate::timecode::FrameRate,
}

/// Progress notifications emitted while the scan runs.
#[derive(Debug, Clone, Copy)]
pub enum ScanEvent {
    /// Another frame was classified. `total` counts duplicated slots.
    Progress { current: u64, total: u64 },
    /// A frame matched the detection mode.
    Flagged { frame: u64 },
}

/// Result of a (possibly cancelled) scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Strictly increasing flagged frame indices in the virtual
    /// (post-duplication) clip.
    pub flagged: Vec<u64>,
    /// Number of virtual frames actually classified.
    pub frames_scanned: u64,
    /// Whether the scan stopped early on the cancel flag.
    pub cancelled: bool,
}

/// How many slots a source frame occupies in the virtual clip.
///
/// Duplicating frame N means it appears once per listing in `dup_frames`
/// on top of its original occurrence, exactly as the upstream
/// duplicate-frames preprocessing would decode it.
fn slot_count(dup_frames: &[u64], frame: u64) -> u64 {
    1 + dup_frames.iter().filter(|&&d| d == frame).count() as u64
}

/// Runs a scan over `input`, returning the flagged virtual frame indices.
///
/// The classifier reports `(source_frame, combed)` pairs in decode order;
/// this function expands duplicated frames, applies inverse mode, and
/// notifies `observer` of progress and hits. Checking `cancel` between
/// frames makes an interrupt look like a shorter clip to everything
/// downstream.
pub fn run_scan<C: FrameClassifier + ?Sized>(
    classifier: &C,
    input: &Path,
    clip: &ClipInfo,
    config: &ScanConfig,
    cancel: &AtomicBool,
    observer: &mut dyn FnMut(ScanEvent),
) -> CoreResult<ScanOutcome> {
    config.validate()?;

    let inverse = config.mode == DetectionMode::Uncombed;
    let total = clip.frame_count + config.dup_frames.len() as u64;

    let mut flagged: Vec<u64> = Vec::new();
    let mut virtual_index: u64 = 0;
    let mut cancelled = false;

    if !config.dup_frames.is_empty() {
        log::info!("Duplicating frames with IDs: {:?}", config.dup_frames);
    }
    log::debug!(
        "Scanning {} ({} frames, {} after duplication)",
        input.display(),
        clip.frame_count,
        total
    );

    classifier.classify(input, &mut |frame, combed| {
        if cancel.load(Ordering::SeqCst) {
            cancelled = true;
            return Ok(ClassifierControl::Stop);
        }
        let hit = combed != inverse;
        for _ in 0..slot_count(&config.dup_frames, frame) {
            if hit {
                flagged.push(virtual_index);
                observer(ScanEvent::Flagged {
                    frame: virtual_index,
                });
            }
            virtual_index += 1;
            observer(ScanEvent::Progress {
                current: virtual_index,
                total,
            });
        }
        Ok(ClassifierControl::Continue)
    })?;

    if cancelled {
        log::warn!(
            "Scan cancelled after {} of {} frames; reporting the prefix",
            virtual_index,
            total
        );
    }

    Ok(ScanOutcome {
        flagged,
        frames_scanned: virtual_index,
        cancelled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreResult;
    use crate::timecode::FrameRate;

    /// Classifier that replays a fixed per-frame combed pattern.
    struct FixedClassifier {
        combed: Vec<bool>,
    }

    impl FrameClassifier for FixedClassifier {
        fn classify(
            &self,
            _input: &Path,
            handler: &mut dyn FnMut(u64, bool) -> CoreResult<ClassifierControl>,
        ) -> CoreResult<()> {
            for (frame, &combed) in self.combed.iter().enumerate() {
                if let ClassifierControl::Stop = handler(frame as u64, combed)? {
                    break;
                }
            }
            Ok(())
        }
    }

    fn clip(frames: u64) -> ClipInfo {
        ClipInfo {
            frame_count: frames,
            frame_rate: FrameRate::new(24000, 1001),
        }
    }

    fn scan(
        pattern: Vec<bool>,
        config: &ScanConfig,
        cancel_after: Option<u64>,
    ) -> ScanOutcome {
        let classifier = FixedClassifier {
            combed: pattern.clone(),
        };
        let cancel = AtomicBool::new(false);
        let mut observer = |event: ScanEvent| {
            if let ScanEvent::Progress { current, .. } = event {
                if Some(current) == cancel_after {
                    cancel.store(true, Ordering::SeqCst);
                }
            }
        };
        run_scan(
            &classifier,
            Path::new("test.mkv"),
            &clip(pattern.len() as u64),
            config,
            &cancel,
            &mut observer,
        )
        .unwrap()
    }

    #[test]
    fn test_collects_combed_frames_in_order() {
        let outcome = scan(
            vec![false, true, true, false, true],
            &ScanConfig::default(),
            None,
        );
        assert_eq!(outcome.flagged, vec![1, 2, 4]);
        assert_eq!(outcome.frames_scanned, 5);
        assert!(!outcome.cancelled);
    }

    #[test]
    fn test_inverse_mode_flags_uncombed_frames() {
        let config = ScanConfig {
            mode: DetectionMode::Uncombed,
            ..ScanConfig::default()
        };
        let outcome = scan(vec![false, true, true, false, true], &config, None);
        assert_eq!(outcome.flagged, vec![0, 3]);
    }

    #[test]
    fn test_duplicated_frame_occupies_two_slots() {
        // Duplicating frame 1 shifts everything after it by one and flags
        // both copies when the source frame is combed.
        let config = ScanConfig {
            dup_frames: vec![1],
            ..ScanConfig::default()
        };
        let outcome = scan(vec![false, true, false, true], &config, None);
        assert_eq!(outcome.flagged, vec![1, 2, 4]);
        assert_eq!(outcome.frames_scanned, 5);
    }

    #[test]
    fn test_frame_listed_twice_is_triplicated() {
        let config = ScanConfig {
            dup_frames: vec![0, 0],
            ..ScanConfig::default()
        };
        let outcome = scan(vec![true, false], &config, None);
        assert_eq!(outcome.flagged, vec![0, 1, 2]);
        assert_eq!(outcome.frames_scanned, 4);
    }

    #[test]
    fn test_cancellation_keeps_prefix() {
        let outcome = scan(
            vec![true, true, true, true, true],
            &ScanConfig::default(),
            Some(2),
        );
        assert!(outcome.cancelled);
        assert_eq!(outcome.frames_scanned, 2);
        assert_eq!(outcome.flagged, vec![0, 1]);
    }

    #[test]
    fn test_invalid_config_fails_before_classification() {
        let classifier = FixedClassifier {
            combed: vec![true],
        };
        let config = ScanConfig {
            threshold: 0,
            ..ScanConfig::default()
        };
        let cancel = AtomicBool::new(false);
        let result = run_scan(
            &classifier,
            Path::new("test.mkv"),
            &clip(1),
            &config,
            &cancel,
            &mut |_| {},
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_slot_count() {
        assert_eq!(slot_count(&[], 3), 1);
        assert_eq!(slot_count(&[3], 3), 2);
        assert_eq!(slot_count(&[3, 3, 7], 3), 3);
        assert_eq!(slot_count(&[3, 3, 7], 7), 2);
        assert_eq!(slot_count(&[3], 4), 1);
    }
}
