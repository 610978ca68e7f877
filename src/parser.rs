use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::tokens::is_typography_class;

/// One CSS rule block: `selector { body }`. Bodies are assumed flat; a nested
/// `{`/`}` pair is not supported and corrupts the remainder of the scan.
static RULE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^{]+)\{([^}]+)\}").expect("rule block regex"));

/// `@apply` directive inside a declaration body, capturing the class list up
/// to the next `;` or the end of the body.
static APPLY_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@apply\s+([^;]+)").expect("@apply regex"));

/// One qualifying CSS rule: the dot-stripped selector and the typography
/// utility classes its `@apply` directive listed, in source order.
///
/// Invariant: `text_classes` is never empty; rules without typography classes
/// are not materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStyle {
    pub name: String,
    pub text_classes: Vec<String>,
}

/// All qualifying rules of a stylesheet, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedStyleSet {
    pub styles: Vec<ParsedStyle>,
}

impl ParsedStyleSet {
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }
}

/// Scan a stylesheet for class rules whose `@apply` directive lists typography
/// utility classes.
///
/// Parsing is best-effort pattern scanning, not a CSS grammar: regions that do
/// not match the `selector { body }` shape contribute nothing, and no error is
/// ever raised. Only single class selectors are recognized; rules defined via
/// plain property declarations (no `@apply`) are skipped.
pub fn parse(css: &str) -> ParsedStyleSet {
    let mut styles = Vec::new();

    for block in RULE_BLOCK.captures_iter(css) {
        let selector = block[1].trim();
        let body = block[2].trim();

        if !selector.starts_with('.') {
            continue;
        }
        let name = &selector[1..];

        let Some(apply) = APPLY_DIRECTIVE.captures(body) else {
            continue;
        };

        let text_classes: Vec<String> = apply[1]
            .split_whitespace()
            .filter(|class| is_typography_class(class))
            .map(str::to_string)
            .collect();

        if !text_classes.is_empty() {
            styles.push(ParsedStyle {
                name: name.to_string(),
                text_classes,
            });
        }
    }

    ParsedStyleSet { styles }
}
