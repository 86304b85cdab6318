//! Implementation of the 'scan' subcommand.
//!
//! This module wires the core library together: probe the clip, run the
//! classifier scan with a progress bar and Ctrl-C handling, synthesize
//! the ranges, and hand the four report payloads to the file sink.

use crate::cli::ScanArgs;
use crate::error::CliResult;
use crate::output;

use combcheck_core::{
    CoreError, DetectionMode, ScanConfig, ScanEvent, SidecarClassifier, build_ranges,
    check_dependency, get_clip_info, render_reports, run_scan,
};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

const SPACER: &str =
    "-------------------------------------------------------------------------";

/// Parses a comma separated duplicate frame list like "12,97,3041".
pub fn parse_dup_frames(raw: &str) -> CliResult<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>().map_err(|_| {
                CoreError::InvalidConfig(format!("'{s}' is not a valid frame ID"))
            })
        })
        .collect()
}

/// Runs the full scan pipeline for one input file.
pub fn run_scan_command(args: ScanArgs) -> CliResult<()> {
    let input = args.input.canonicalize().map_err(|e| {
        CoreError::PathError(format!(
            "Invalid input path '{}': {}",
            args.input.display(),
            e
        ))
    })?;

    check_dependency("ffmpeg")?;
    check_dependency("ffprobe")?;

    let config = ScanConfig {
        mode: if args.inverse {
            DetectionMode::Uncombed
        } else {
            DetectionMode::Combed
        },
        threshold: args.threshold,
        min_range: args.min_range as usize,
        dup_frames: match args.dup_frames.as_deref() {
            Some(raw) => parse_dup_frames(raw)?,
            None => Vec::new(),
        },
    };
    config.validate()?;
    let label = config.mode.label();

    let clip = get_clip_info(&input)?;
    let total_frames = clip.frame_count + config.dup_frames.len() as u64;

    eprintln!("Scanning {}…", input.display());
    eprintln!("{}", style(SPACER).dim());

    // Ctrl-C flips the shared flag; the scan stops between frames and the
    // accumulated prefix is reported like a shorter clip.
    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_handler = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        cancel_handler.store(true, Ordering::SeqCst);
    })
    .map_err(|e| CoreError::OperationFailed(format!("Failed to set Ctrl-C handler: {e}")))?;

    let progress = ProgressBar::new(total_frames);
    progress.set_style(
        ProgressStyle::with_template(
            "Scanning frame {pos} of {len} ({percent}%) {bar:40.cyan/blue}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let outcome = run_scan(
        &SidecarClassifier::new(),
        &input,
        &clip,
        &config,
        &cancel,
        &mut |event| match event {
            ScanEvent::Flagged { frame } => {
                progress.println(format!("Frame {frame:>7} detected as '{label}'."));
            }
            ScanEvent::Progress { current, .. } => {
                progress.set_position(current);
            }
        },
    )?;
    progress.finish_and_clear();

    if outcome.cancelled {
        warn!("Scan process cancelled with ^C.");
    }

    let range_set = build_ranges(&outcome.flagged, config.threshold, config.min_range)?;
    let reports = render_reports(&range_set, &outcome.flagged, clip.frame_rate, config.mode)?;

    eprintln!("{}", style(SPACER).dim());
    eprintln!("Computed Ranges:");
    eprint!("{}", reports.debug_text);
    eprintln!("{}", style(SPACER).dim());

    let base: PathBuf = args.output.unwrap_or_else(|| input.clone());
    output::write_reports(&reports, &base)?;

    info!("All done.");
    Ok(())
}
