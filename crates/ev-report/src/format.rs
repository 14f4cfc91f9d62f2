//! Small text helpers shared by the report and the binary.

use std::fmt;
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// A section heading framed by `=` rules.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

/// Last lines printed once every artifact is on disk.
pub fn closing_banner() -> String {
    banner("ANALYSIS COMPLETE - FILES SAVED")
}

/// Confirmation line for one written artifact, naming the file only.
pub fn saved_line(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("✓ Saved: {name}")
}

/// Fixed-precision number that prints `n/a` when undefined.
#[derive(Clone, Copy)]
pub(crate) struct Fixed(pub f64, pub usize);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            write!(f, "{:.*}", self.1, self.0)
        } else {
            f.write_str("n/a")
        }
    }
}
