use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;

use crate::errors::{Result, TextStyleError};

/// A style attribute as the host registry reports it.
///
/// Hosts collapse attributes that differ across text runs into a "mixed"
/// sentinel; this makes that an explicit third state so the matcher's
/// disqualification rule is visible in the types. `Unset` and `Mixed` both
/// disqualify a candidate from matching a defined requirement; neither is a
/// wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAttr<T> {
    Defined(T),
    Unset,
    Mixed,
}

impl<T> TextAttr<T> {
    /// The concrete value, when there is one
    pub fn as_defined(&self) -> Option<&T> {
        match self {
            TextAttr::Defined(value) => Some(value),
            TextAttr::Unset | TextAttr::Mixed => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, TextAttr::Defined(_))
    }
}

impl<T> Default for TextAttr<T> {
    fn default() -> Self {
        TextAttr::Unset
    }
}

/// An existing named style in the library collection. Owned by the registry;
/// read-only to the pipeline. Hosts that expose no weight attribute leave
/// `font_weight` at `Unset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStyle {
    pub name: String,

    #[serde(default)]
    pub font_family: TextAttr<String>,

    #[serde(default)]
    pub font_size: TextAttr<f64>,

    #[serde(default)]
    pub font_weight: TextAttr<u16>,

    #[serde(default)]
    pub line_height: TextAttr<f64>,

    #[serde(default)]
    pub letter_spacing: TextAttr<f64>,
}

impl LibraryStyle {
    /// A candidate with every attribute unset
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            font_family: TextAttr::Unset,
            font_size: TextAttr::Unset,
            font_weight: TextAttr::Unset,
            line_height: TextAttr::Unset,
            letter_spacing: TextAttr::Unset,
        }
    }
}

/// An ordered collection of library styles, resolvable by id through the
/// registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleCollection {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub children: Vec<LibraryStyle>,
}

/// A text style created by the synthesizer. Fields left at `None` keep the
/// registry's defaults for a newly created style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

/// The host style registry, injected into the synthesizer.
///
/// The registry is single-writer; creation calls are made one at a time, in
/// parsed order, so created style order is deterministic.
pub trait StyleRegistry {
    /// Resolve a collection id to its library collection, if present
    fn collection(&self, id: &str) -> Option<&StyleCollection>;

    /// Create a new, empty text style and hand back a handle for populating it
    fn create_text_style(&mut self) -> &mut TextStyle;
}

/// User-visible notifications, injected alongside the registry.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that writes to stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Notifier that records messages instead of printing them. Used by tests and
/// headless runs that surface notifications through another channel.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().expect("notifier lock").push(message.to_string());
    }
}

/// Serialized registry state: library collections keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub collections: IndexMap<String, StyleCollection>,
}

/// Registry backed by an in-memory snapshot. Stands in for the host document
/// in the CLI and in tests; created styles accumulate for the session and are
/// not persisted anywhere by the registry itself.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    collections: IndexMap<String, StyleCollection>,
    created: Vec<TextStyle>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Self {
        Self {
            collections: snapshot.collections,
            created: Vec::new(),
        }
    }

    /// Load a registry snapshot from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TextStyleError::InputError(format!(
                "Failed to read library snapshot {}: {}",
                path.display(),
                e
            ))
        })?;
        let snapshot: RegistrySnapshot = serde_json::from_str(&content)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn insert_collection(&mut self, id: &str, collection: StyleCollection) {
        self.collections.insert(id.to_string(), collection);
    }

    /// Styles created so far this session, in creation order
    pub fn created_styles(&self) -> &[TextStyle] {
        &self.created
    }
}

impl StyleRegistry for InMemoryRegistry {
    fn collection(&self, id: &str) -> Option<&StyleCollection> {
        self.collections.get(id)
    }

    fn create_text_style(&mut self) -> &mut TextStyle {
        self.created.push(TextStyle::default());
        self.created.last_mut().expect("style just created")
    }
}
