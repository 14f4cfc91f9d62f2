//! Locating and reading the analysis configuration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use ev_core::AnalysisConfig;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "EVAC_ANALYSIS_CONFIG";

/// Configuration from the file named by [`CONFIG_ENV`], or defaults when the
/// variable is unset.  The result is validated either way.
pub fn load() -> Result<AnalysisConfig> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => from_file(Path::new(&path))?,
        None => AnalysisConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

pub fn from_file(path: &Path) -> Result<AnalysisConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}
