//! Range synthesis: merging flagged frame indices into contiguous ranges.
//!
//! A range is a maximal run of flagged frames where consecutive members
//! are no further apart than the merge threshold. Merging is a single
//! left-to-right O(n) pass; filtering by minimum member count removes
//! whole ranges only and never restructures the survivors.

use crate::error::{CoreError, CoreResult};
use serde::Serialize;

/// A contiguous run of flagged frames.
///
/// `members` is exactly the subsequence of the flagged input that merged
/// together; it is never empty. Because merged members may sit up to
/// `threshold` frames apart, the member count and the inclusive span
/// width can legitimately differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameRange {
    members: Vec<u64>,
}

impl FrameRange {
    fn new(members: Vec<u64>) -> Self {
        debug_assert!(!members.is_empty());
        Self { members }
    }

    /// First flagged frame in the range.
    #[must_use]
    pub fn start(&self) -> u64 {
        self.members[0]
    }

    /// Last flagged frame in the range.
    #[must_use]
    pub fn end(&self) -> u64 {
        self.members[self.members.len() - 1]
    }

    /// Number of flagged frames actually in the range.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.members.len()
    }

    /// Inclusive span width `end - start + 1`, counting any internal gap
    /// frames the merge threshold allowed.
    #[must_use]
    pub fn span(&self) -> u64 {
        self.end() - self.start() + 1
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.members.len() == 1
    }

    /// The flagged frames merged into this range, in increasing order.
    #[must_use]
    pub fn members(&self) -> &[u64] {
        &self.members
    }
}

/// The ordered, filtered result of range synthesis.
///
/// `ranges` holds only the visible ranges (member count >= `min_range`);
/// the position within it is the user-facing range number shared by every
/// output format. `total_ranges` remembers how many ranges existed before
/// filtering, which the debug summary reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSet {
    ranges: Vec<FrameRange>,
    total_ranges: usize,
}

impl RangeSet {
    /// Visible ranges in increasing start order.
    #[must_use]
    pub fn ranges(&self) -> &[FrameRange] {
        &self.ranges
    }

    /// Number of visible ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of ranges computed before the min-range filter.
    #[must_use]
    pub fn total_ranges(&self) -> usize {
        self.total_ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameRange> {
        self.ranges.iter()
    }
}

/// Checks that a flagged sequence is strictly increasing.
///
/// A violation is a contract breach by the upstream classifier, not user
/// input, so it surfaces as `MalformedSequence` rather than being fixed up.
pub(crate) fn ensure_strictly_increasing(flagged: &[u64]) -> CoreResult<()> {
    for pair in flagged.windows(2) {
        if pair[1] <= pair[0] {
            return Err(CoreError::MalformedSequence(format!(
                "flagged frame indices must be strictly increasing, got {} after {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}

/// Merges flagged frame indices into ranges and applies the min-range filter.
///
/// Frames merge into the open range while each is within `threshold` of
/// the previous member; a larger gap closes the range and opens a new one.
/// An empty input yields an empty `RangeSet`, not an error.
pub fn build_ranges(flagged: &[u64], threshold: u64, min_range: usize) -> CoreResult<RangeSet> {
    if threshold < 1 {
        return Err(CoreError::InvalidConfig(format!(
            "threshold must be >= 1, got {threshold}"
        )));
    }
    if min_range < 1 {
        return Err(CoreError::InvalidConfig(format!(
            "min_range must be >= 1, got {min_range}"
        )));
    }
    ensure_strictly_increasing(flagged)?;

    let mut all_ranges: Vec<FrameRange> = Vec::new();
    let mut current: Vec<u64> = Vec::new();
    let mut last_index: u64 = 0;

    for &frame in flagged {
        if !current.is_empty() && frame > last_index.saturating_add(threshold) {
            all_ranges.push(FrameRange::new(std::mem::take(&mut current)));
        }
        current.push(frame);
        last_index = frame;
    }
    if !current.is_empty() {
        all_ranges.push(FrameRange::new(current));
    }

    let total_ranges = all_ranges.len();
    let ranges: Vec<FrameRange> = all_ranges
        .into_iter()
        .filter(|r| r.frames() >= min_range)
        .collect();

    Ok(RangeSet {
        ranges,
        total_ranges,
    })
}
