//! Configuration for the filter engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{CommunityError, Result};
use crate::error::util::safe_read_to_string;

/// Configuration for the `FilterEngine`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// House count at which a pass switches to parallel processing
    pub parallel_threshold: usize,
    /// Log a summary line after every pass
    pub log_summaries: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
            log_summaries: true,
        }
    }
}

impl EngineConfig {
    /// Configuration that always processes houses on the calling thread
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Read a configuration from a JSON file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "engine configuration")?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(CommunityError::Config(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `house_count` houses should be processed in parallel
    #[must_use]
    pub const fn use_parallel(&self, house_count: usize) -> bool {
        house_count >= self.parallel_threshold
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine Configuration:")?;
        if self.parallel_threshold == usize::MAX {
            writeln!(f, "  Parallel Threshold: disabled")?;
        } else {
            writeln!(f, "  Parallel Threshold: {} houses", self.parallel_threshold)?;
        }
        writeln!(f, "  Log Summaries: {}", self.log_summaries)
    }
}
