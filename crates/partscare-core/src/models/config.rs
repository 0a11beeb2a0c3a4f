//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the partscare pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartscareConfig {
    /// Vendor classification configuration.
    pub classify: ClassifyConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

impl Default for PartscareConfig {
    fn default() -> Self {
        Self {
            classify: ClassifyConfig::default(),
            extraction: ExtractionConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

/// Vendor classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Pages of text fed to the keyword classifier. Two is usually enough
    /// for the header block.
    pub pages: usize,

    /// Pages scanned for the aircraft certification date.
    pub certification_pages: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            pages: 2,
            certification_pages: 5,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Lowest ATA chapter retained by the generic grammar.
    pub ata_min: u32,

    /// Highest ATA chapter retained by the generic grammar.
    pub ata_max: u32,

    /// Minimum length for a body line to qualify as a recovered description.
    pub min_header_len: usize,

    /// Body lines inspected for a header keyword after a bare anchor line.
    pub header_lookahead: usize,

    /// Body lines searched for the component date before falling back to
    /// the whole block.
    pub date_window: usize,

    /// Require a usage counter in addition to an identity field before a
    /// block is kept. Heuristic threshold; tunable, not a hard law.
    pub require_usage: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            ata_min: 21,
            ata_max: 79,
            min_header_len: 10,
            header_lookahead: 3,
            date_window: 6,
            require_usage: true,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// File extensions eligible for batch ingestion (lower-case).
    pub extensions: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["pdf".to_string(), "txt".to_string()],
        }
    }
}

impl PartscareConfig {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PartscareConfig::default();
        assert_eq!(config.classify.pages, 2);
        assert_eq!(config.extraction.ata_min, 21);
        assert_eq!(config.extraction.ata_max, 79);
        assert!(config.extraction.require_usage);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PartscareConfig =
            serde_json::from_str(r#"{"extraction": {"ata_max": 80}}"#).unwrap();
        assert_eq!(config.extraction.ata_max, 80);
        assert_eq!(config.extraction.ata_min, 21);
        assert_eq!(config.classify.pages, 2);
    }
}
