//! Report emission: four synchronized views of one range set.
//!
//! Every payload is derived from the same `RangeSet`, so range numbering,
//! counts and span widths agree across formats. A range either appears in
//! all formats or, when the min-range filter removed it, in none; the raw
//! JSON index is the deliberate exception and always carries the full
//! unfiltered flagged sequence so consumers can re-derive ranges with
//! different parameters.
//!
//! The literal payload is re-parsed by downstream tooling as a Python
//! list; its quote/bracket layout and the chapter file's
//! `CHAPTERnn=`/`CHAPTERnnNAME=` pairs are fixed external contracts.

use crate::config::DetectionMode;
use crate::error::CoreResult;
use crate::ranges::{FrameRange, RangeSet, ensure_strictly_increasing};
use crate::timecode::{FrameRate, frame_to_timecode};

/// The four report payloads produced for one scan.
///
/// Writing these to persistent storage is the caller's responsibility;
/// the payloads themselves are complete file bodies (the JSON payload is
/// the bare single-line array, the line-based payloads end in newlines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSet {
    /// Human-readable per-range lines plus a totals summary.
    pub debug_text: String,
    /// Python-literal range list for downstream tooling.
    pub literal_text: String,
    /// Raw unfiltered flagged frame indices as a compact JSON array.
    pub json_text: String,
    /// OGM-style chapter markers, one pair per visible range.
    pub chapters_text: String,
}

/// Renders all four report payloads from one range set.
///
/// Fails fast on an invalid frame rate or a malformed flagged sequence
/// before any payload is produced.
pub fn render_reports(
    range_set: &RangeSet,
    flagged: &[u64],
    rate: FrameRate,
    mode: DetectionMode,
) -> CoreResult<ReportSet> {
    ensure_strictly_increasing(flagged)?;
    // Validate the rate up front so a bad rate cannot yield three payloads
    // and then fail on the chapter file.
    frame_to_timecode(0, rate)?;

    Ok(ReportSet {
        debug_text: render_debug(range_set, flagged, mode),
        literal_text: render_literal(range_set, mode),
        json_text: render_json(flagged),
        chapters_text: render_chapters(range_set, rate, mode)?,
    })
}

fn render_debug(range_set: &RangeSet, flagged: &[u64], mode: DetectionMode) -> String {
    let label = mode.label();
    let mut out = String::new();
    for (index, range) in range_set.iter().enumerate() {
        if range.is_single() {
            out.push_str(&format!(
                "#{:>2}: {:>7}           (1 {} frame)\n",
                index,
                range.start(),
                label
            ));
        } else {
            out.push_str(&format!(
                "#{:>2}: {:>7} -> {:>7}  ({} frames of {} are {})\n",
                index,
                range.start(),
                range.end(),
                range.frames(),
                range.span(),
                label
            ));
        }
    }
    out.push_str(&format!(
        "{} frames detected as '{}', {} possible ranges computed.\n",
        flagged.len(),
        label,
        range_set.total_ranges()
    ));
    out
}

fn literal_entry(range: &FrameRange) -> String {
    if range.is_single() {
        format!("'{}',", range.start())
    } else {
        format!("'[{} {}]',", range.start(), range.end())
    }
}

fn render_literal(range_set: &RangeSet, mode: DetectionMode) -> String {
    let label = mode.label();
    // The assignment name is fixed even in inverse mode; downstream
    // tooling imports it by this name.
    let mut out = String::from("combed_ranges = [\n");
    for (index, range) in range_set.iter().enumerate() {
        let comment = if range.is_single() {
            format!("# Range #{index:>2}: 1 {label} frame")
        } else {
            format!(
                "# Range #{:>2}: {} frames of {} are {}",
                index,
                range.frames(),
                range.span(),
                label
            )
        };
        out.push_str(&format!("\t{:<22}  {}\n", literal_entry(range), comment));
    }
    out.push_str("]\n");
    out
}

fn render_json(flagged: &[u64]) -> String {
    // serde_json's compact form matches the contract: no whitespace after
    // separators, single line.
    serde_json::to_string(flagged).unwrap_or_else(|_| String::from("[]"))
}

fn render_chapters(
    range_set: &RangeSet,
    rate: FrameRate,
    mode: DetectionMode,
) -> CoreResult<String> {
    let label = mode.label_capitalized();
    let mut out = String::new();
    for (index, range) in range_set.iter().enumerate() {
        let number = index + 1;
        let timecode = frame_to_timecode(range.start(), rate)?;
        out.push_str(&format!("CHAPTER{number:02}={timecode}\n"));
        if range.is_single() {
            out.push_str(&format!(
                "CHAPTER{:02}NAME={} frame #{}\n",
                number,
                label,
                range.start()
            ));
        } else {
            out.push_str(&format!(
                "CHAPTER{:02}NAME={} frame range {}—{}\n",
                number,
                label,
                range.start(),
                range.end()
            ));
        }
    }
    Ok(out)
}
