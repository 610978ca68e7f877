use serde::{Deserialize, Serialize};

use crate::errors::{Result, TextStyleError};
use crate::matcher::find_match;
use crate::parser::{self, ParsedStyleSet};
use crate::registry::StyleRegistry;
use crate::resolver::resolve;
use crate::tokens::TokenTable;

/// Outcome of one synthesis run.
///
/// `created` counts creation, not matching success: every parsed rule yields a
/// created style whether or not a library match supplied its properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// Styles created, one per parsed rule
    pub created: usize,

    /// Of those, how many had a library match applied
    pub matched: usize,
}

/// Drives the parse -> resolve -> match -> create pipeline against an injected
/// style registry.
///
/// Holds only immutable inputs (the token table and the target collection id),
/// so each call is independent: nothing is cached across invocations.
pub struct StyleSynthesizer {
    table: TokenTable,
    collection_id: String,
}

impl StyleSynthesizer {
    pub fn new(table: TokenTable, collection_id: impl Into<String>) -> Self {
        Self {
            table,
            collection_id: collection_id.into(),
        }
    }

    /// Synthesizer over the built-in token table
    pub fn with_builtin_tokens(collection_id: impl Into<String>) -> Self {
        Self::new(TokenTable::builtin(), collection_id)
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn token_table(&self) -> &TokenTable {
        &self.table
    }

    /// Read-only pass over the stylesheet: what would be created, without
    /// touching the registry. Used for user-facing confirmation.
    pub fn preview(&self, css: &str) -> ParsedStyleSet {
        parser::parse(css)
    }

    /// Parse the stylesheet and create one named style per qualifying rule,
    /// copying matched library properties onto each.
    ///
    /// An empty parse still proceeds (and creates zero styles); a collection
    /// id that does not resolve aborts the whole run with
    /// [`TextStyleError::RegistryLookupFailed`] before anything is created.
    /// The batch is best-effort: styles already created stay if a later one
    /// fails, and an unmatched style is created with registry defaults.
    pub fn synthesize<R: StyleRegistry>(&self, registry: &mut R, css: &str) -> Result<SynthesisResult> {
        let parsed = parser::parse(css);

        let collection =
            registry
                .collection(&self.collection_id)
                .ok_or_else(|| TextStyleError::RegistryLookupFailed {
                    id: self.collection_id.clone(),
                })?;
        let candidates = collection.children.clone();

        let mut matched = 0;
        for style in &parsed.styles {
            let created = registry.create_text_style();
            created.name = style.name.clone();

            let target = resolve(&self.table, &style.text_classes);
            if let Some(library_style) = find_match(&target, &candidates) {
                // Copy only attributes the match has in a defined state; the
                // rest keep the registry's defaults for a new style
                if let Some(family) = library_style.font_family.as_defined() {
                    created.font_family = Some(family.clone());
                }
                if let Some(&size) = library_style.font_size.as_defined() {
                    created.font_size = Some(size);
                }
                if let Some(&line_height) = library_style.line_height.as_defined() {
                    created.line_height = Some(line_height);
                }
                if let Some(&letter_spacing) = library_style.letter_spacing.as_defined() {
                    created.letter_spacing = Some(letter_spacing);
                }
                matched += 1;
            }
        }

        Ok(SynthesisResult {
            created: parsed.styles.len(),
            matched,
        })
    }
}
