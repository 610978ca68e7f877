use crate::tokens::{TextProperties, TokenTable};

/// Resolve an ordered utility class list to a merged target property set.
///
/// Classes are applied left to right; on a same-field conflict the later class
/// wins, matching the application order of the original declaration. Classes
/// not present in the table are silently ignored. Pure function of its inputs:
/// the result may have zero, some, or all fields set.
pub fn resolve<S: AsRef<str>>(table: &TokenTable, classes: &[S]) -> TextProperties {
    let mut target = TextProperties::default();
    for class in classes {
        if let Some(properties) = table.get(class.as_ref()) {
            target.overlay(properties);
        }
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenTable;

    fn classes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolve_round_trip_scenario() {
        let table = TokenTable::builtin();
        let target = resolve(&table, &classes(&["font-bold", "text-2xl", "leading-tight"]));

        assert_eq!(target.font_weight, Some(700));
        assert_eq!(target.font_size, Some(24.0));
        assert_eq!(target.line_height, Some(1.25));
        assert_eq!(target.font_family, None);
        assert_eq!(target.letter_spacing, None);
    }

    #[test]
    fn test_resolve_last_class_wins_on_conflict() {
        let table = TokenTable::builtin();

        let target = resolve(&table, &classes(&["text-sm", "text-lg"]));
        assert_eq!(target.font_size, Some(18.0));

        let target = resolve(&table, &classes(&["text-lg", "text-sm"]));
        assert_eq!(target.font_size, Some(14.0));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = TokenTable::builtin();
        let list = classes(&["font-mono", "text-xs", "tracking-wider"]);

        assert_eq!(resolve(&table, &list), resolve(&table, &list));
    }

    #[test]
    fn test_resolve_ignores_unknown_classes() {
        let table = TokenTable::builtin();
        let target = resolve(&table, &classes(&["text-unknown", "font-", "text-base"]));

        assert_eq!(target.font_size, Some(16.0));
        assert_eq!(target.font_weight, None);
    }

    #[test]
    fn test_resolve_empty_list() {
        let table = TokenTable::builtin();
        assert!(resolve(&table, &classes(&[])).is_empty());
    }

    #[test]
    fn test_resolve_with_custom_table() {
        let mut table = TokenTable::empty();
        table.insert(
            "text-brand",
            TextProperties {
                font_size: Some(17.0),
                ..TextProperties::default()
            },
        );

        let target = resolve(&table, &classes(&["text-brand", "text-lg"]));
        // "text-lg" is unknown to this table, so the custom entry stands
        assert_eq!(target.font_size, Some(17.0));
    }
}
