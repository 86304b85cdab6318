// combcheck-cli/src/output.rs
//
// File sink for the generated report payloads. The core defines the exact
// textual contracts; this module only decides file names and writes them.

use crate::error::CliResult;
use combcheck_core::ReportSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination paths for the three persisted reports.
///
/// The debug payload is not persisted; it goes to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Python-literal range list.
    pub info: PathBuf,
    /// Raw JSON frame index.
    pub json: PathBuf,
    /// Chapter markers.
    pub chapters: PathBuf,
}

impl ReportPaths {
    /// Derives the report paths from the output base name.
    ///
    /// The suffixes are part of the tool's external contract; downstream
    /// scripts glob for them.
    #[must_use]
    pub fn for_base(base: &Path) -> Self {
        let base = base.to_string_lossy();
        Self {
            info: PathBuf::from(format!("{base},combingcheck,info.py")),
            json: PathBuf::from(format!("{base},combingcheck.json")),
            chapters: PathBuf::from(format!("{base},combingcheck,chapters.txt")),
        }
    }
}

/// Writes the literal, JSON and chapter payloads next to the output base.
///
/// The JSON payload is a bare single-line array; the sink appends the
/// final newline so the file ends like any other text file.
pub fn write_reports(reports: &ReportSet, base: &Path) -> CliResult<ReportPaths> {
    let paths = ReportPaths::for_base(base);

    fs::write(&paths.info, &reports.literal_text)?;
    log::info!(
        ">>> File with range information successfully written to <{}>.",
        paths.info.display()
    );

    fs::write(&paths.json, format!("{}\n", reports.json_text))?;
    log::info!(
        ">>> JSON file successfully written to <{}>.",
        paths.json.display()
    );

    fs::write(&paths.chapters, &reports.chapters_text)?;
    log::info!(
        ">>> Chapter file successfully written to <{}>.",
        paths.chapters.display()
    );

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_naming() {
        let paths = ReportPaths::for_base(Path::new("/tmp/episode01.mkv"));
        assert_eq!(
            paths.info,
            PathBuf::from("/tmp/episode01.mkv,combingcheck,info.py")
        );
        assert_eq!(
            paths.json,
            PathBuf::from("/tmp/episode01.mkv,combingcheck.json")
        );
        assert_eq!(
            paths.chapters,
            PathBuf::from("/tmp/episode01.mkv,combingcheck,chapters.txt")
        );
    }
}
