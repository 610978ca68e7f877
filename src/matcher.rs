use crate::registry::{LibraryStyle, TextAttr};
use crate::tokens::TextProperties;

/// Find the first candidate satisfying every defined field of the target.
///
/// Candidates are scanned in their given order and ties go to the earlier
/// candidate; there is no secondary scoring. A field the target leaves unset
/// places no requirement on the candidate. Equality is exact; fractional
/// line-height and letter-spacing values get no tolerance.
pub fn find_match<'a>(
    target: &TextProperties,
    candidates: &'a [LibraryStyle],
) -> Option<&'a LibraryStyle> {
    candidates
        .iter()
        .find(|candidate| satisfies(candidate, target))
}

/// One attribute against one requirement. A candidate attribute in the unset
/// or mixed state fails any defined requirement; it is never a wildcard.
fn attr_matches<T: PartialEq>(attr: &TextAttr<T>, required: Option<&T>) -> bool {
    match required {
        None => true,
        Some(value) => attr.as_defined() == Some(value),
    }
}

fn satisfies(candidate: &LibraryStyle, target: &TextProperties) -> bool {
    attr_matches(&candidate.font_family, target.font_family.as_ref())
        && attr_matches(&candidate.font_size, target.font_size.as_ref())
        && attr_matches(&candidate.font_weight, target.font_weight.as_ref())
        && attr_matches(&candidate.line_height, target.line_height.as_ref())
        && attr_matches(&candidate.letter_spacing, target.letter_spacing.as_ref())
}
