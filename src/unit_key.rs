//! # Unit Key Normalizer Module
//!
//! Derives the canonical grouping key for an ingredient from its name and unit.
//! Two ingredient occurrences are the same aggregation target iff their keys
//! are equal, so everything that should not distinguish them (letter case,
//! surrounding or repeated whitespace) is folded away here.

use lazy_static::lazy_static;
use regex::Regex;

/// Separator placed between the normalized name and unit.
///
/// U+001F is a control character, and control characters are stripped from
/// both fields, so the separator can never occur inside either of them.
pub const KEY_SEPARATOR: char = '\u{1f}';

lazy_static! {
    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("Whitespace pattern should be valid");
}

/// Normalize a single field: drop non-whitespace control characters, then
/// trim, collapse whitespace runs to one space and lower-case.
pub fn normalize_field(value: &str) -> String {
    let visible: String = value
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    WHITESPACE_RUN
        .replace_all(visible.trim(), " ")
        .chars()
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalize a unit string on its own (used when bucketing amounts)
pub fn normalize_unit(unit: &str) -> String {
    normalize_field(unit)
}

/// Build the aggregation key for an ingredient name and unit.
///
/// Total: any input, including an empty unit, yields a valid key.
///
/// # Examples
///
/// ```rust
/// use grocery_list::unit_key::normalize;
///
/// assert_eq!(normalize("  Basil", "Cup "), normalize("basil", "cup"));
/// assert_ne!(normalize("basil", "cup"), normalize("basil", "leaves"));
/// ```
pub fn normalize(name: &str, unit: &str) -> String {
    let name = normalize_field(name);
    let unit = normalize_field(unit);
    let mut key = String::with_capacity(name.len() + unit.len() + 1);
    key.push_str(&name);
    key.push(KEY_SEPARATOR);
    key.push_str(&unit);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(normalize("Olive Oil", "TBSP"), normalize("olive oil", "tbsp"));
        assert_eq!(normalize("  olive   oil ", " tbsp"), normalize("olive oil", "tbsp"));
    }

    #[test]
    fn test_unit_distinguishes_keys() {
        assert_ne!(normalize("basil", "cup"), normalize("basil", "leaves"));
    }

    #[test]
    fn test_empty_unit_is_valid() {
        let key = normalize("Eggs", "");
        assert_eq!(key, format!("eggs{KEY_SEPARATOR}"));
    }

    #[test]
    fn test_separator_cannot_be_smuggled_in() {
        // Without stripping, "a\u{1f}b" + "" and "a" + "b" would collide.
        let smuggled = normalize("a\u{1f}b", "");
        let honest = normalize("a", "b");
        assert_ne!(smuggled, honest);
        assert_eq!(smuggled.matches(KEY_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_control_character_does_not_shield_whitespace() {
        assert_eq!(normalize("\u{0} basil", "cup"), normalize("basil", "cup"));
        assert_eq!(normalize("basil \u{7}", "\u{1b} cup\t"), normalize("basil", "cup"));
        assert_eq!(normalize_field("olive\u{0} \u{0} oil"), "olive oil");
        assert_eq!(normalize_field("olive\toil"), "olive oil");
    }

    #[test]
    fn test_normalize_unit() {
        assert_eq!(normalize_unit(" Fl  Oz "), "fl oz");
        assert_eq!(normalize_unit(""), "");
    }
}
