//! Configuration types for the compliance validator.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run-level parameters for DBSCAN compliance checking.
///
/// `eps` and `min_pts` come from the trigger configuration of the run being
/// examined; a cluster is only judged against the parameters it was
/// purportedly built with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Neighborhood radius, in the same scaled units as the projected hits
    #[serde(default = "default_eps")]
    pub eps: i64,

    /// Minimum neighbors (self included) for a point to be core
    #[serde(default = "default_min_pts")]
    pub min_pts: usize,

    /// Divisor applied to cluster-relative start times during projection
    #[serde(default = "default_time_scale")]
    pub time_scale: u32,

    /// Per-cluster budget for the pairwise distance pass, in milliseconds.
    /// `None` disables the deadline.
    #[serde(default)]
    pub compute_budget_ms: Option<u64>,

    /// Upper bound on activities examined per run; `None` examines all
    #[serde(default)]
    pub max_activities: Option<usize>,
}

fn default_eps() -> i64 {
    10
}

fn default_min_pts() -> usize {
    3
}

fn default_time_scale() -> u32 {
    100
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            eps: default_eps(),
            min_pts: default_min_pts(),
            time_scale: default_time_scale(),
            compute_budget_ms: None,
            max_activities: None,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ValidationConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
