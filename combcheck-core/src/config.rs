//! Scan configuration and validation.
//!
//! The configuration is assembled by the CLI (or any other caller) and
//! validated once before a scan starts. Range synthesis re-checks the
//! parameters it receives so the pure functions stay safe to call on
//! their own.

use crate::error::{CoreError, CoreResult};

/// Which frame condition the scan is looking for.
///
/// This is a closed set: the emitter and the classifier only recognize
/// these two labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMode {
    /// Flag frames the classifier reports as combed (the default).
    Combed,
    /// Inverse mode: flag frames the classifier reports as NOT combed.
    Uncombed,
}

impl DetectionMode {
    /// Lowercase label used in report bodies ("combed" / "uncombed").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DetectionMode::Combed => "combed",
            DetectionMode::Uncombed => "uncombed",
        }
    }

    /// Capitalized label used in chapter names ("Combed" / "Uncombed").
    #[must_use]
    pub fn label_capitalized(self) -> &'static str {
        match self {
            DetectionMode::Combed => "Combed",
            DetectionMode::Uncombed => "Uncombed",
        }
    }
}

/// Configuration for a combing scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Detection mode (combed or inverse).
    pub mode: DetectionMode,
    /// Maximum gap between consecutive flagged frames for them to merge
    /// into one range. Must be >= 1.
    pub threshold: u64,
    /// Minimum member count a range must have to appear in any output.
    /// Must be >= 1.
    pub min_range: usize,
    /// Source frame IDs to duplicate before the scan, as the upstream
    /// preprocessing step would. May list the same ID more than once.
    pub dup_frames: Vec<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: DetectionMode::Combed,
            threshold: 2,
            min_range: 1,
            dup_frames: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Validates the configuration, failing fast on out-of-range values.
    pub fn validate(&self) -> CoreResult<()> {
        if self.threshold < 1 {
            return Err(CoreError::InvalidConfig(format!(
                "threshold must be >= 1, got {}",
                self.threshold
            )));
        }
        if self.min_range < 1 {
            return Err(CoreError::InvalidConfig(format!(
                "min_range must be >= 1, got {}",
                self.min_range
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScanConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = ScanConfig {
            threshold: 0,
            ..ScanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_min_range_rejected() {
        let config = ScanConfig {
            min_range: 0,
            ..ScanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(DetectionMode::Combed.label(), "combed");
        assert_eq!(DetectionMode::Uncombed.label(), "uncombed");
        assert_eq!(DetectionMode::Combed.label_capitalized(), "Combed");
        assert_eq!(DetectionMode::Uncombed.label_capitalized(), "Uncombed");
    }
}
