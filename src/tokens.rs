use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Class-name prefixes that mark a utility class as typography-related.
const TYPOGRAPHY_PREFIXES: [&str; 4] = ["text-", "font-", "leading-", "tracking-"];

/// Check whether a utility class belongs to the typography domain.
///
/// Matching is by prefix only, so a bare prefix such as `"font-"` classifies
/// as typography. That looseness is intentional and covered by tests.
pub fn is_typography_class(name: &str) -> bool {
    TYPOGRAPHY_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Partial set of typographic properties contributed by one utility class.
///
/// A `None` field means "not specified by this class"; merging is field-wise
/// override, never numeric combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Font weight, 100-900
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,

    /// Unitless line-height multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,

    /// Letter spacing in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

impl TextProperties {
    /// Overlay another property set onto this one, field by field.
    /// Fields set in `other` win; fields absent in `other` are left alone.
    pub fn overlay(&mut self, other: &TextProperties) {
        if let Some(family) = &other.font_family {
            self.font_family = Some(family.clone());
        }
        if let Some(size) = other.font_size {
            self.font_size = Some(size);
        }
        if let Some(weight) = other.font_weight {
            self.font_weight = Some(weight);
        }
        if let Some(line_height) = other.line_height {
            self.line_height = Some(line_height);
        }
        if let Some(letter_spacing) = other.letter_spacing {
            self.letter_spacing = Some(letter_spacing);
        }
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.line_height.is_none()
            && self.letter_spacing.is_none()
    }
}

fn family(name: &str) -> TextProperties {
    TextProperties {
        font_family: Some(name.to_string()),
        ..TextProperties::default()
    }
}

fn weight(value: u16) -> TextProperties {
    TextProperties {
        font_weight: Some(value),
        ..TextProperties::default()
    }
}

fn size(px: f64) -> TextProperties {
    TextProperties {
        font_size: Some(px),
        ..TextProperties::default()
    }
}

fn leading(value: f64) -> TextProperties {
    TextProperties {
        line_height: Some(value),
        ..TextProperties::default()
    }
}

fn tracking(px: f64) -> TextProperties {
    TextProperties {
        letter_spacing: Some(px),
        ..TextProperties::default()
    }
}

/// Mapping from utility class name to the partial property set it encodes.
///
/// The table is read-only once built and is passed explicitly to the resolver,
/// so tests can run against custom token sets. Keys are disjoint per category
/// (family/weight/size/leading/tracking) by construction.
#[derive(Debug, Clone)]
pub struct TokenTable {
    entries: IndexMap<String, TextProperties>,
}

impl TokenTable {
    /// Create an empty table
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The built-in utility tokens: Tailwind's typography scale mapped to
    /// concrete pixel/multiplier values.
    pub fn builtin() -> Self {
        let mut table = Self::empty();

        // Font families
        table.insert("font-sans", family("Inter"));
        table.insert("font-serif", family("Georgia"));
        table.insert("font-mono", family("Roboto Mono"));

        // Font weights
        table.insert("font-thin", weight(100));
        table.insert("font-extralight", weight(200));
        table.insert("font-light", weight(300));
        table.insert("font-normal", weight(400));
        table.insert("font-medium", weight(500));
        table.insert("font-semibold", weight(600));
        table.insert("font-bold", weight(700));
        table.insert("font-extrabold", weight(800));
        table.insert("font-black", weight(900));

        // Font sizes (pixels)
        table.insert("text-xs", size(12.0));
        table.insert("text-sm", size(14.0));
        table.insert("text-base", size(16.0));
        table.insert("text-lg", size(18.0));
        table.insert("text-xl", size(20.0));
        table.insert("text-2xl", size(24.0));
        table.insert("text-3xl", size(30.0));
        table.insert("text-4xl", size(36.0));
        table.insert("text-5xl", size(48.0));
        table.insert("text-6xl", size(60.0));
        table.insert("text-7xl", size(72.0));
        table.insert("text-8xl", size(96.0));
        table.insert("text-9xl", size(128.0));

        // Line heights (multipliers)
        table.insert("leading-none", leading(1.0));
        table.insert("leading-tight", leading(1.25));
        table.insert("leading-snug", leading(1.375));
        table.insert("leading-normal", leading(1.5));
        table.insert("leading-relaxed", leading(1.625));
        table.insert("leading-loose", leading(2.0));

        // Letter spacing (pixels)
        table.insert("tracking-tighter", tracking(-1.0));
        table.insert("tracking-tight", tracking(-0.5));
        table.insert("tracking-normal", tracking(0.0));
        table.insert("tracking-wide", tracking(0.5));
        table.insert("tracking-wider", tracking(1.0));
        table.insert("tracking-widest", tracking(2.0));

        table
    }

    /// Insert or replace a token entry
    pub fn insert(&mut self, class: &str, properties: TextProperties) {
        self.entries.insert(class.to_string(), properties);
    }

    /// Look up the property set for a utility class
    pub fn get(&self, class: &str) -> Option<&TextProperties> {
        self.entries.get(class)
    }

    /// True when the class is present in the table
    pub fn contains(&self, class: &str) -> bool {
        self.entries.contains_key(class)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::builtin()
    }
}
