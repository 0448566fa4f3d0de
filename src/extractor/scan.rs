// file: src/extractor/scan.rs
// description: extractor contract and the scan orchestrator
// reference: https://doc.rust-lang.org/std/iter/trait.Iterator.html

use crate::error::ScanError;
use crate::extractor::numeric::{integers, mixed_ordinals, numbers_fmt1};
use crate::extractor::temporal::{dates_fmt2, dates_iso8601};
use crate::models::{Category, Hit, HitRecord};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Lazy, finite, non-restartable stream of hits over one text.
pub type Hits<'t> = Box<dyn Iterator<Item = Hit<'t>> + 't>;

pub type ExtractorFn = for<'t> fn(&'t str) -> Hits<'t>;

/// Anything that turns text into a fresh stream of hits.
///
/// Every `fn(&str) -> Hits<'_>` is an extractor, so the built-in functions
/// (and caller-defined ones) can be passed straight to [`scan`].
pub trait Extractor {
    fn extract<'t>(&self, text: &'t str) -> Hits<'t>;
}

impl<F> Extractor for F
where
    F: for<'t> Fn(&'t str) -> Hits<'t>,
{
    fn extract<'t>(&self, text: &'t str) -> Hits<'t> {
        self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractorKind {
    MixedOrdinals,
    Integers,
    DatesIso8601,
    DatesFmt2,
    NumbersFmt1,
}

impl ExtractorKind {
    pub const ALL: [ExtractorKind; 5] = [
        ExtractorKind::MixedOrdinals,
        ExtractorKind::Integers,
        ExtractorKind::DatesIso8601,
        ExtractorKind::DatesFmt2,
        ExtractorKind::NumbersFmt1,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExtractorKind::MixedOrdinals => "mixed_ordinals",
            ExtractorKind::Integers => "integers",
            ExtractorKind::DatesIso8601 => "dates_iso8601",
            ExtractorKind::DatesFmt2 => "dates_fmt2",
            ExtractorKind::NumbersFmt1 => "numbers_fmt1",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ExtractorKind::MixedOrdinals => Category::Ordinal,
            ExtractorKind::Integers | ExtractorKind::NumbersFmt1 => Category::Integer,
            ExtractorKind::DatesIso8601 | ExtractorKind::DatesFmt2 => Category::Date,
        }
    }

    pub fn function(&self) -> ExtractorFn {
        match self {
            ExtractorKind::MixedOrdinals => mixed_ordinals,
            ExtractorKind::Integers => integers,
            ExtractorKind::DatesIso8601 => dates_iso8601,
            ExtractorKind::DatesFmt2 => dates_fmt2,
            ExtractorKind::NumbersFmt1 => numbers_fmt1,
        }
    }

    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>, ScanError> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }
}

impl Extractor for ExtractorKind {
    fn extract<'t>(&self, text: &'t str) -> Hits<'t> {
        (self.function())(text)
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtractorKind {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ExtractorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ScanError::UnknownExtractor(name.to_string()))
    }
}

/// Iterator returned by [`scan`].
pub struct Scan<'t, I> {
    text: &'t str,
    extractors: I,
    current: Option<Hits<'t>>,
}

impl<'t, I> Iterator for Scan<'t, I>
where
    I: Iterator,
    I::Item: Extractor,
{
    type Item = Hit<'t>;

    fn next(&mut self) -> Option<Hit<'t>> {
        loop {
            if let Some(hits) = self.current.as_mut() {
                if let Some(hit) = hits.next() {
                    return Some(hit);
                }
                self.current = None;
            }

            let extractor = self.extractors.next()?;
            self.current = Some(extractor.extract(self.text));
        }
    }
}

/// Runs each extractor over the full text, in the order given, yielding all
/// hits of one extractor before starting the next.
///
/// Hits are not merged, sorted or deduplicated: multiple categories may
/// independently claim the same text span.
pub fn scan<'t, I>(text: &'t str, extractors: I) -> Scan<'t, I::IntoIter>
where
    I: IntoIterator,
    I::Item: Extractor,
{
    Scan {
        text,
        extractors: extractors.into_iter(),
        current: None,
    }
}

/// Collects owned records for the named extractors.
pub fn scan_all(text: &str, kinds: &[ExtractorKind]) -> Vec<HitRecord> {
    let records: Vec<HitRecord> = scan(text, kinds.iter().copied())
        .map(HitRecord::from)
        .collect();

    debug!(
        "Scanned {} bytes with {} extractors: {} hits",
        text.len(),
        kinds.len(),
        records.len()
    );

    records
}

pub fn count_by_category(records: &[HitRecord]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.category).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nothing(_text: &str) -> Hits<'_> {
        Box::new(std::iter::empty())
    }

    #[test]
    fn test_extractor_order_not_text_order() {
        let text = "3rd place, then 7";
        let found: Vec<_> = scan(text, [integers as ExtractorFn, mixed_ordinals])
            .map(|hit| (hit.category, hit.as_str()))
            .collect();

        assert_eq!(
            found,
            vec![(Category::Integer, "7"), (Category::Ordinal, "3rd")]
        );
    }

    #[test]
    fn test_overlapping_spans_kept() {
        let text = "total 1845";
        let found: Vec<_> = scan(text, [integers as ExtractorFn, numbers_fmt1])
            .map(|hit| (hit.category, hit.start(), hit.end()))
            .collect();

        assert_eq!(
            found,
            vec![(Category::Integer, 6, 10), (Category::Integer, 6, 10)]
        );
    }

    #[test]
    fn test_custom_extractor_and_empty_list() {
        assert_eq!(scan("1 2 3", [nothing]).count(), 0);
        assert_eq!(scan("1 2 3", Vec::<ExtractorFn>::new()).count(), 0);
    }

    #[test]
    fn test_scan_is_lazy() {
        let mut hits = scan("1 2 3", [ExtractorKind::Integers, ExtractorKind::MixedOrdinals]);

        assert_eq!(hits.next().map(|hit| hit.as_str()), Some("1"));
        assert!(hits.current.is_some());
        assert_eq!(hits.by_ref().count(), 2);
        assert!(hits.next().is_none());
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ExtractorKind::ALL {
            assert_eq!(kind.name().parse::<ExtractorKind>().unwrap(), kind);
        }
        assert!(matches!(
            "floats".parse::<ExtractorKind>(),
            Err(ScanError::UnknownExtractor(name)) if name == "floats"
        ));
    }

    #[test]
    fn test_scan_all_and_counts() {
        let records = scan_all("the 2nd of 25 Jan 2017", &ExtractorKind::ALL);
        let counts = count_by_category(&records);

        assert_eq!(counts.get(&Category::Ordinal), Some(&1));
        assert_eq!(counts.get(&Category::Date), Some(&1));
        // `25` and `2017` from both integers and numbers_fmt1
        assert_eq!(counts.get(&Category::Integer), Some(&4));
    }
}
