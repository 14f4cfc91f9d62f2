//! Analysis configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Input and output locations for one analysis pass.
///
/// Typically deserialized from a JSON file by the application crate; every
/// field falls back to its default when absent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Results table written by the simulator.
    pub input: PathBuf,

    /// Destination of the six-panel overview figure.
    pub overview_output: PathBuf,

    /// Destination of the six-panel detailed figure.
    pub detailed_output: PathBuf,

    /// Raster resolution.  Figure pixel size is inches × dpi.
    pub dpi: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input:           PathBuf::from("results/1.csv"),
            overview_output: PathBuf::from("output/evacuation_analysis_overview.png"),
            detailed_output: PathBuf::from("output/evacuation_analysis_detailed.png"),
            dpi:             300,
        }
    }
}

impl AnalysisConfig {
    /// Check values that serde cannot.
    pub fn validate(&self) -> crate::CoreResult<()> {
        if self.dpi == 0 {
            return Err(crate::CoreError::Config("dpi must be positive".into()));
        }
        if self.overview_output == self.detailed_output {
            return Err(crate::CoreError::Config(format!(
                "overview and detailed figures share the path {}",
                self.overview_output.display()
            )));
        }
        Ok(())
    }
}
