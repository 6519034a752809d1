use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// NameCollation - ordering policy for display names
///
/// Approximates root-locale collation for Latin names:
/// 1. Primary: compare base letters case-insensitively with accents
///    removed, so "Émile" sorts with the E's and "anna" next to "Anna".
/// 2. Secondary: among primary equals, unaccented sorts before accented.
/// 3. Tertiary: among remaining equals, lowercase sorts before uppercase
///    at the first differing position.
///
/// Names that are identical compare `Equal`; a stable sort keeps their
/// input order.
pub struct NameCollation;

impl NameCollation {
    pub fn compare(a: &str, b: &str) -> Ordering {
        Self::primary(a, b)
            .then_with(|| Self::secondary(a, b))
            .then_with(|| Self::tertiary(a, b))
    }

    fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
        name.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
    }

    fn primary(a: &str, b: &str) -> Ordering {
        Self::base_letters(a).cmp(Self::base_letters(b))
    }

    /// Where the accents sit in the decomposed form; no accent sorts first
    fn secondary(a: &str, b: &str) -> Ordering {
        let marks = |name: &str| -> Vec<bool> { name.nfd().map(is_combining_mark).collect() };
        marks(a).cmp(&marks(b))
    }

    fn tertiary(a: &str, b: &str) -> Ordering {
        a.nfd()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .cmp(
                b.nfd()
                    .filter(|c| !is_combining_mark(*c))
                    .map(char::is_uppercase),
            )
    }
}
