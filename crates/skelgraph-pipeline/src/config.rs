//! TOML configuration for a full thin + distance-map run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::options::{DistanceMapOptions, ThinOptions};

/// Options of both stages, as read from a TOML file.
///
/// ```toml
/// [thin]
/// input_file = "vessels.nrrd"
/// skel_type = "end"
/// select_type = "dmax"
/// input_distance_map_file = "vessels_dmap.nrrd"
///
/// [distance_map]
/// input_file = "vessels.nrrd"
/// foreground = "black"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub thin: ThinOptions,
    pub distance_map: DistanceMapOptions,
}

impl PipelineConfig {
    /// Parse a configuration from TOML text. Unset fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse pipeline configuration")
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {:?}", path))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid configuration in {:?}", path))?;
        tracing::debug!("Loaded pipeline configuration from {:?}", path);
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize pipeline configuration")
    }

    /// Validate both stages.
    pub fn validate(&self) -> Result<()> {
        self.thin.validate().context("Invalid thin options")?;
        self.distance_map
            .validate()
            .context("Invalid distance map options")?;
        Ok(())
    }
}
