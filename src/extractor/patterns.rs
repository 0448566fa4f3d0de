// file: src/extractor/patterns.rs
// description: pattern registry with the compiled patterns shared by all extractors
// reference: https://docs.rs/regex

use crate::error::{Result, ScanError};
use crate::extractor::boundary::{WholeWord, WORD_END};
use crate::models::Category;
use lazy_static::lazy_static;
use regex::Regex;

pub const ORDINAL: &str = r"-?\d+(?:st|th|nd|rd)";

pub const INTEGER: &str = r"\d+";

// Date core, then an optional `T`/space separated time with optional zone,
// or a bare HHMMSS. Only the date core is range-checked.
pub const ISO_8601: &str = concat!(
    r"(?:\d{4,}-(?:0\d|1[0-2])-(?:0[1-9]|[12]\d|3[01])",
    r"(?:[T ]\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?",
    r"(?:Z|[A-Z]{1,4}|[+-]\d{2}(?:[:.]?\d{2})?)?)?",
    r"|\d{6})"
);

// A timestamp ends at a real word break: a connector (`.`, `:`, `+`, `-`) only
// ends it when nothing word-like follows, so `04:17:48mdt` is not cut back to
// `04:17`.
pub const ISO_8601_END: &str = r"(?:[^\w.:+\-]|[.:+\-](?:\W|$)|$)";

pub const DAY_MONTH_YEAR: &str =
    r"\d{2} (?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec),? \d{4}";

pub const GROUPED_NUMBER: &str = r"\d{1,3}(?:,\d{3})+|\d+";

// Probes for integer/float disambiguation, applied to the text just before
// and just after an integer candidate.
pub const FLOAT_BEFORE: &str = r"\d\.$";

// The whole digit run after the dot must be consumed before the final check.
pub const FLOAT_AFTER: &str = r"^\.\d+(?:[^\da-zA-Z.]|$)";

lazy_static! {
    static ref REGISTRY: PatternRegistry =
        PatternRegistry::new().expect("built-in patterns are valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Ordinal,
    Integer,
    Iso8601,
    DayMonthYear,
    GroupedNumber,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Ordinal,
        PatternKind::Integer,
        PatternKind::Iso8601,
        PatternKind::DayMonthYear,
        PatternKind::GroupedNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Ordinal => "ordinal",
            PatternKind::Integer => "integer",
            PatternKind::Iso8601 => "iso8601",
            PatternKind::DayMonthYear => "day_month_year",
            PatternKind::GroupedNumber => "grouped_number",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            PatternKind::Ordinal => Category::Ordinal,
            PatternKind::Integer | PatternKind::GroupedNumber => Category::Integer,
            PatternKind::Iso8601 | PatternKind::DayMonthYear => Category::Date,
        }
    }

    pub fn fragment(&self) -> &'static str {
        match self {
            PatternKind::Ordinal => ORDINAL,
            PatternKind::Integer => INTEGER,
            PatternKind::Iso8601 => ISO_8601,
            PatternKind::DayMonthYear => DAY_MONTH_YEAR,
            PatternKind::GroupedNumber => GROUPED_NUMBER,
        }
    }

    pub fn right_boundary(&self) -> &'static str {
        match self {
            PatternKind::Iso8601 => ISO_8601_END,
            _ => WORD_END,
        }
    }
}

/// Immutable set of compiled patterns, built once and shared read-only.
///
/// Extractors take a registry by reference; the free extractor functions use
/// [`PatternRegistry::global`].
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    ordinal: WholeWord,
    integer: WholeWord,
    iso8601: WholeWord,
    day_month_year: WholeWord,
    grouped_number: WholeWord,
    float_before: Regex,
    float_after: Regex,
}

impl PatternRegistry {
    pub fn new() -> Result<Self> {
        let compile = |kind: PatternKind| {
            WholeWord::with_right_boundary(
                kind.as_str(),
                kind.category(),
                kind.fragment(),
                kind.right_boundary(),
            )
        };

        Ok(Self {
            ordinal: compile(PatternKind::Ordinal)?,
            integer: compile(PatternKind::Integer)?,
            iso8601: compile(PatternKind::Iso8601)?,
            day_month_year: compile(PatternKind::DayMonthYear)?,
            grouped_number: compile(PatternKind::GroupedNumber)?,
            float_before: compile_probe("float_before", FLOAT_BEFORE)?,
            float_after: compile_probe("float_after", FLOAT_AFTER)?,
        })
    }

    pub fn global() -> &'static PatternRegistry {
        &REGISTRY
    }

    pub fn get(&self, kind: PatternKind) -> &WholeWord {
        match kind {
            PatternKind::Ordinal => &self.ordinal,
            PatternKind::Integer => &self.integer,
            PatternKind::Iso8601 => &self.iso8601,
            PatternKind::DayMonthYear => &self.day_month_year,
            PatternKind::GroupedNumber => &self.grouped_number,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PatternKind, &WholeWord)> {
        PatternKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub(crate) fn float_before(&self) -> &Regex {
        &self.float_before
    }

    pub(crate) fn float_after(&self) -> &Regex {
        &self.float_after
    }
}

fn compile_probe(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ScanError::Pattern {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_and_categories() {
        let registry = PatternRegistry::global();

        for (kind, pattern) in registry.iter() {
            assert_eq!(pattern.name(), kind.as_str());
            assert_eq!(pattern.category(), kind.category());
            assert_eq!(pattern.fragment(), kind.fragment());
        }
    }

    #[test]
    fn test_ordinal_pattern() {
        let ordinal = PatternRegistry::global().get(PatternKind::Ordinal);
        assert!(ordinal.is_match("the 5th"));
        assert!(ordinal.is_match("-2nd place"));
        assert!(ordinal.is_match("3st"));
        assert!(!ordinal.is_match("5thly"));
    }

    #[test]
    fn test_iso8601_core_range() {
        let iso = PatternRegistry::global().get(PatternKind::Iso8601);
        assert!(iso.is_match("2015-12-31"));
        assert!(iso.is_match("2015-00-01"));
        assert!(!iso.is_match("2015-13-01"));
        assert!(!iso.is_match("2015-12-32"));
        assert!(!iso.is_match("2015-12-00"));
        assert!(!iso.is_match("at 2018-06-21T04:17:48mdt "));
        assert!(!iso.is_match("at 2018-06-22T18:22:19.123abc"));
        assert!(iso.is_match("on 2015-07-25, then"));
    }

    #[test]
    fn test_day_month_year_pattern() {
        let dmy = PatternRegistry::global().get(PatternKind::DayMonthYear);
        assert!(dmy.is_match("01 Mar 1999"));
        assert!(dmy.is_match("01 Mar, 1999"));
        assert!(!dmy.is_match("01 March 1999"));
        assert!(!dmy.is_match("1 Mar 1999"));
    }

    #[test]
    fn test_float_probes() {
        let registry = PatternRegistry::global();
        assert!(registry.float_before().is_match("77."));
        assert!(!registry.float_before().is_match("77"));
        assert!(registry.float_after().is_match(".9%"));
        assert!(registry.float_after().is_match(".14"));
        assert!(!registry.float_after().is_match(".2.3"));
        assert!(!registry.float_after().is_match(". "));
        assert!(!registry.float_after().is_match(".12.3"));
        assert!(!registry.float_after().is_match(".14abc"));
    }

    #[test]
    fn test_fresh_registry_builds() {
        assert!(PatternRegistry::new().is_ok());
    }
}
