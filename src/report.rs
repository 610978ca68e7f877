use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::TextStyle;
use crate::synthesizer::SynthesisResult;

/// Metadata for a synthesis report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Version of the report format
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of stylesheet files processed
    pub files_processed: usize,

    /// Number of styles created (one per qualifying rule)
    pub styles_created: usize,

    /// Of those, how many received properties from a library match
    pub styles_matched: usize,

    /// Collection id the styles were matched against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    /// Extractor version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor_version: Option<String>,
}

/// Complete report written by the `create` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisReport {
    /// Metadata about the run
    pub metadata: ReportMetadata,

    /// The created styles, in creation order
    pub styles: Vec<TextStyle>,
}

impl SynthesisReport {
    pub fn new() -> Self {
        Self {
            metadata: ReportMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                files_processed: 0,
                styles_created: 0,
                styles_matched: 0,
                collection: None,
                extractor_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            styles: Vec::new(),
        }
    }

    /// Convert the report to a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Convert the report to a pretty JSON string
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert the report to a compact JSON string
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for SynthesisReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating reports
pub struct ReportBuilder {
    report: SynthesisReport,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            report: SynthesisReport::new(),
        }
    }

    /// Set the number of stylesheet files processed
    pub fn with_files_processed(mut self, count: usize) -> Self {
        self.report.metadata.files_processed = count;
        self
    }

    /// Set the collection id used for matching
    pub fn with_collection(mut self, id: &str) -> Self {
        self.report.metadata.collection = Some(id.to_string());
        self
    }

    /// Record the synthesis counts
    pub fn with_result(mut self, result: SynthesisResult) -> Self {
        self.report.metadata.styles_created = result.created;
        self.report.metadata.styles_matched = result.matched;
        self
    }

    /// Attach the created styles
    pub fn with_styles(mut self, styles: Vec<TextStyle>) -> Self {
        self.report.styles = styles;
        self
    }

    pub fn build(self) -> SynthesisReport {
        self.report
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
