use crate::estimator::EstimatorParams;
use crate::io::read_json_file;
use crate::query::Observation;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Input for `locate_demo` when run with a config file.
///
/// ```json
/// {
///   "observations": [
///     { "first": [120.0, -40.0], "second": [180.0, -10.0] },
///     { "first": [0.0, 0.0], "second": [100.0, 0.0], "measuredDelta": 5.0 }
///   ],
///   "output": { "format": "both", "jsonOut": "out/estimates.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateDemoConfig {
    pub observations: Vec<Observation>,
    #[serde(default)]
    pub estimator: EstimatorParams,
    #[serde(default)]
    pub output: LocateOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocateOutputConfig {
    pub format: OutputFormat,
    /// Where to write the detailed JSON report. Printed to stdout when absent.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

pub fn load_config(path: &Path) -> Result<LocateDemoConfig, String> {
    let config: LocateDemoConfig = read_json_file(path)?;
    if config.observations.is_empty() {
        return Err(format!("Config {} lists no observations", path.display()));
    }
    Ok(config)
}
