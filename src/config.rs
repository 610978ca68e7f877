use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::errors::{Result, TextStyleError};
use crate::tokens::{TextProperties, TokenTable};

/// Tool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Id of the library collection styles are matched against
    pub collection: Option<String>,

    /// Token table extensions
    pub tokens: TokenExtend,
}

/// Additional utility tokens layered over the built-in table, one map per
/// property category so category keys stay disjoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenExtend {
    /// Family classes, e.g. `font-display` -> "Söhne"
    pub font_family: HashMap<String, String>,

    /// Weight classes, e.g. `font-heavy` -> 850
    pub font_weight: HashMap<String, u16>,

    /// Size classes, e.g. `text-hero` -> 88 (pixels)
    pub font_size: HashMap<String, f64>,

    /// Leading classes, e.g. `leading-prose` -> 1.7 (multiplier)
    pub line_height: HashMap<String, f64>,

    /// Tracking classes, e.g. `tracking-caps` -> 1.5 (pixels)
    pub letter_spacing: HashMap<String, f64>,
}

impl TokenExtend {
    pub fn is_empty(&self) -> bool {
        self.font_family.is_empty()
            && self.font_weight.is_empty()
            && self.font_size.is_empty()
            && self.line_height.is_empty()
            && self.letter_spacing.is_empty()
    }
}

impl StyleConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TextStyleError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TextStyleError::ConfigError {
            message: format!("Failed to parse YAML config: {}", e),
        })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TextStyleError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| TextStyleError::ConfigError {
            message: format!("Failed to parse JSON config: {}", e),
        })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(TextStyleError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Merge with another configuration; fields set in `other` win
    pub fn merge(mut self, other: Self) -> Self {
        if other.collection.is_some() {
            self.collection = other.collection;
        }

        self.tokens.font_family.extend(other.tokens.font_family);
        self.tokens.font_weight.extend(other.tokens.font_weight);
        self.tokens.font_size.extend(other.tokens.font_size);
        self.tokens.line_height.extend(other.tokens.line_height);
        self.tokens.letter_spacing.extend(other.tokens.letter_spacing);

        self
    }

    /// The effective token table: built-in entries plus this configuration's
    /// extensions (extensions win on a shared key)
    pub fn build_table(&self) -> TokenTable {
        let mut table = TokenTable::builtin();

        for (class, family) in &self.tokens.font_family {
            table.insert(
                class,
                TextProperties {
                    font_family: Some(family.clone()),
                    ..TextProperties::default()
                },
            );
        }
        for (class, &weight) in &self.tokens.font_weight {
            table.insert(
                class,
                TextProperties {
                    font_weight: Some(weight),
                    ..TextProperties::default()
                },
            );
        }
        for (class, &size) in &self.tokens.font_size {
            table.insert(
                class,
                TextProperties {
                    font_size: Some(size),
                    ..TextProperties::default()
                },
            );
        }
        for (class, &line_height) in &self.tokens.line_height {
            table.insert(
                class,
                TextProperties {
                    line_height: Some(line_height),
                    ..TextProperties::default()
                },
            );
        }
        for (class, &letter_spacing) in &self.tokens.letter_spacing {
            table.insert(
                class,
                TextProperties {
                    letter_spacing: Some(letter_spacing),
                    ..TextProperties::default()
                },
            );
        }

        table
    }
}
