//! Configuration structures for the extraction pipeline.
//!
//! The core's extraction rules are fixed at design time; configuration
//! covers caller policy only (strategy selection defaults and how to treat
//! an empty result set).

use serde::{Deserialize, Serialize};

use super::transaction::DocumentKind;

/// Main configuration for the txtract pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TxtractConfig {
    /// Extraction policy.
    pub extraction: ExtractionConfig,

    /// Output defaults.
    pub output: OutputConfig,
}

impl Default for TxtractConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Extraction policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Strategy used when the caller does not pass a document kind.
    pub default_kind: DocumentKind,

    /// Treat an empty result sequence as an error. The core itself never
    /// errors on "no transactions found"; this is caller policy.
    pub fail_on_empty: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_kind: DocumentKind::PosReceipt,
            fail_on_empty: false,
        }
    }
}

/// Output defaults for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format name ("json", "csv", or "text").
    pub format: String,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: true,
        }
    }
}

impl TxtractConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
