// file: src/extractor/numeric.rs
// description: ordinal, integer and grouped-number extractors
// reference: https://docs.rs/regex

use crate::extractor::patterns::{PatternKind, PatternRegistry};
use crate::extractor::Hits;
use crate::models::Hit;
use regex::Match;

/// Tokens that begin with a number and end like `1st` or `2nd`.
pub fn mixed_ordinals(text: &str) -> Hits<'_> {
    Box::new(mixed_ordinals_with(PatternRegistry::global(), text))
}

/// Whole-word integers, skipping either half of a floating-point number.
pub fn integers(text: &str) -> Hits<'_> {
    Box::new(integers_with(PatternRegistry::global(), text))
}

/// Whole-word integers, keeping thousands-grouped runs like `123,456` whole.
pub fn numbers_fmt1(text: &str) -> Hits<'_> {
    Box::new(numbers_fmt1_with(PatternRegistry::global(), text))
}

pub fn is_float_fragment(text: &str, candidate: &Match<'_>) -> bool {
    is_float_fragment_with(PatternRegistry::global(), text, candidate)
}

pub fn mixed_ordinals_with<'t>(
    registry: &PatternRegistry,
    text: &'t str,
) -> impl Iterator<Item = Hit<'t>> {
    registry.get(PatternKind::Ordinal).hits(text)
}

pub fn integers_with<'t>(
    registry: &PatternRegistry,
    text: &'t str,
) -> impl Iterator<Item = Hit<'t>> {
    registry
        .get(PatternKind::Integer)
        .hits(text)
        .filter(move |hit| !is_float_fragment_with(registry, text, &hit.matched))
}

pub fn numbers_fmt1_with<'t>(
    registry: &PatternRegistry,
    text: &'t str,
) -> impl Iterator<Item = Hit<'t>> {
    registry.get(PatternKind::GroupedNumber).hits(text)
}

/// True when `candidate` is the fractional part (`3.14` -> `14`) or the
/// integer part (`3.14` -> `3`) of a floating-point literal in `text`.
///
/// Only the characters next to the candidate are probed. The integer-part
/// check looks at the char after the whole fractional digit run: a run
/// chained into another dot (`1.12.3`) or into letters (`3.14abc`) does not
/// make the leading integer a float.
pub fn is_float_fragment_with(
    registry: &PatternRegistry,
    text: &str,
    candidate: &Match<'_>,
) -> bool {
    registry.float_before().is_match(&text[..candidate.start()])
        || registry.float_after().is_match(&text[candidate.end()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(hits: Hits<'_>) -> Vec<&str> {
        hits.map(|hit| hit.as_str()).collect()
    }

    #[test]
    fn test_ordinals_in_order() {
        let text = "On the 5th of May... the 1st example...";
        assert_eq!(texts(mixed_ordinals(text)), vec!["5th", "1st"]);
    }

    #[test]
    fn test_negative_and_ungrammatical_ordinals() {
        assert_eq!(texts(mixed_ordinals("-3rd and 3st")), vec!["-3rd", "3st"]);
    }

    #[test]
    fn test_integers_skip_floats() {
        let text = "pi is 3.14 and e is 2.718, count 12.";
        assert_eq!(texts(integers(text)), vec!["12"]);
    }

    #[test]
    fn test_integers_keep_range_and_trailing_period() {
        assert_eq!(texts(integers("15-20 years, trending toward 80.")), vec!["15", "20", "80"]);
    }

    #[test]
    fn test_float_at_end_of_text() {
        assert!(texts(integers("value 3.14")).is_empty());
    }

    #[test]
    fn test_version_chain_not_a_float() {
        // `1` is followed by `.2.` so it stays; `2` and `3` follow `digit.`
        assert_eq!(texts(integers("v 1.2.3 ")), vec!["1"]);
    }

    #[test]
    fn test_multi_digit_chain_keeps_leading_integer() {
        assert_eq!(texts(integers("v 1.12.3 ")), vec!["1"]);
        assert_eq!(texts(integers("build 10.250.7")), vec!["10"]);
        assert_eq!(texts(integers("3.14abc")), vec!["3"]);
    }

    #[test]
    fn test_no_digits() {
        assert!(texts(integers("no integers")).is_empty());
        assert!(texts(numbers_fmt1("no integers")).is_empty());
    }

    #[test]
    fn test_grouped_numbers() {
        assert_eq!(
            texts(numbers_fmt1("Income of bob in rupees is 123,456,789")),
            vec!["123,456,789"]
        );
        assert_eq!(texts(numbers_fmt1("1,2345 and 7")), vec!["1", "2345", "7"]);
    }

    #[test]
    fn test_float_fragment_predicate() {
        let text = "77.9%";
        let registry = PatternRegistry::global();
        let candidates: Vec<_> = registry.get(PatternKind::Integer).find_iter(text).collect();

        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|m| is_float_fragment(text, m)));
    }

    #[test]
    fn test_injected_registry() {
        let registry = PatternRegistry::new().unwrap();
        let found: Vec<_> = integers_with(&registry, "a 1 b 2.5")
            .map(|hit| hit.as_str())
            .collect();

        assert_eq!(found, vec!["1"]);
    }
}
