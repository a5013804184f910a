use filament::StdError;
use serde::{Deserialize, Serialize};

/// Generator settings supplied by the outer build step.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fallback package for literal placement when a generated component
    /// has no package of its own.
    pub default_package: Option<String>,
    /// When set, resolution scans every builtin variant and fails on
    /// overlapping matchers instead of taking the first match.
    pub detect_ambiguity: bool,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the config from its JSON section.
    pub fn from_json(data: &str) -> Result<Self, StdError> {
        Ok(serde_json::from_str(data)?)
    }
}
