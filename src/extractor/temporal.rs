// file: src/extractor/temporal.rs
// description: date and timestamp extractors
// reference: iso 8601 date and time representations

use crate::extractor::patterns::{PatternKind, PatternRegistry};
use crate::extractor::Hits;
use crate::models::Hit;

/// ISO-8601 style dates, optionally with a time of day and zone, plus bare
/// `HHMMSS` times. Time fields are not range-checked.
pub fn dates_iso8601(text: &str) -> Hits<'_> {
    Box::new(dates_iso8601_with(PatternRegistry::global(), text))
}

/// Dates like `25 Jan 2017` or `25 Jan, 2017`.
pub fn dates_fmt2(text: &str) -> Hits<'_> {
    Box::new(dates_fmt2_with(PatternRegistry::global(), text))
}

pub fn dates_iso8601_with<'t>(
    registry: &PatternRegistry,
    text: &'t str,
) -> impl Iterator<Item = Hit<'t>> {
    registry.get(PatternKind::Iso8601).hits(text)
}

pub fn dates_fmt2_with<'t>(
    registry: &PatternRegistry,
    text: &'t str,
) -> impl Iterator<Item = Hit<'t>> {
    registry.get(PatternKind::DayMonthYear).hits(text)
}
