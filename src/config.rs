//! Report configuration (.teststat.conf) parsing and handling
//!
//! The configuration file uses INI format with a [DEFAULT] section. Every key
//! is optional; missing keys keep their defaults and command-line flags
//! override whatever the file sets.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default number of rows shown in the slow test ranking.
pub const DEFAULT_SLOWEST: usize = 30;

/// Default threshold, in seconds, above which an execution counts as slow.
pub const DEFAULT_SLOW_THRESHOLD: f64 = 1.0;

/// Options controlling how a run report is rendered
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Render collapsible Markdown instead of plain text
    pub markdown: bool,

    /// Number of rows shown in the slow test ranking; the package ranking
    /// shows one more than this
    pub slowest: usize,

    /// Executions at or above this many seconds contribute to the slow total
    pub slow_threshold: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            markdown: false,
            slowest: DEFAULT_SLOWEST,
            slow_threshold: DEFAULT_SLOW_THRESHOLD,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a .teststat.conf file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&contents)
    }

    /// Parse configuration from a string
    pub fn parse(contents: &str) -> Result<Self> {
        let ini: HashMap<String, HashMap<String, String>> = serde_ini::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse configuration: {}", e)))?;

        let default = ini
            .get("DEFAULT")
            .ok_or_else(|| Error::Config("No [DEFAULT] section in configuration".to_string()))?;

        let mut config = ReportConfig::default();

        if let Some(value) = default.get("markdown") {
            config.markdown = parse_bool("markdown", value)?;
        }

        if let Some(value) = default.get("slowest") {
            config.slowest = value.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "slowest must be a non-negative integer, got {:?}",
                    value
                ))
            })?;
        }

        if let Some(value) = default.get("slow_threshold") {
            config.slow_threshold = value.trim().parse().map_err(|_| {
                Error::Config(format!("slow_threshold must be a number, got {:?}", value))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration and
    /// validates the result.
    pub fn with_overrides(
        mut self,
        markdown: Option<bool>,
        slowest: Option<usize>,
        slow_threshold: Option<f64>,
    ) -> Result<Self> {
        if let Some(markdown) = markdown {
            self.markdown = markdown;
        }
        if let Some(slowest) = slowest {
            self.slowest = slowest;
        }
        if let Some(threshold) = slow_threshold {
            self.slow_threshold = threshold;
        }

        self.validate()?;
        Ok(self)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.slow_threshold.is_finite() || self.slow_threshold < 0.0 {
            return Err(Error::Config(format!(
                "slow_threshold must be a non-negative number of seconds, got {}",
                self.slow_threshold
            )));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::Config(format!(
            "{} must be a boolean, got {:?}",
            key, value
        ))),
    }
}
