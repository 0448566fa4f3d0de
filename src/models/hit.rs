// file: src/models/hit.rs
// description: tagged extraction results and their owned, serializable form
// reference: https://docs.rs/regex/latest/regex/struct.Match.html

use crate::error::ScanError;
use regex::Match;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ordinal,
    Integer,
    Date,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ordinal => "ordinal",
            Category::Integer => "integer",
            Category::Date => "date",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ordinal" => Ok(Category::Ordinal),
            "integer" => Ok(Category::Integer),
            "date" => Ok(Category::Date),
            other => Err(ScanError::InvalidInput(format!("unknown category: {}", other))),
        }
    }
}

/// One `(category, match)` result borrowed from the scanned text.
///
/// Hits are never deduplicated: two extractors may independently claim the
/// same span, and both hits are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'t> {
    pub category: Category,
    pub matched: Match<'t>,
}

impl<'t> Hit<'t> {
    pub fn new(category: Category, matched: Match<'t>) -> Self {
        Self { category, matched }
    }

    pub fn as_str(&self) -> &'t str {
        self.matched.as_str()
    }

    pub fn start(&self) -> usize {
        self.matched.start()
    }

    pub fn end(&self) -> usize {
        self.matched.end()
    }

    pub fn to_record(&self) -> HitRecord {
        HitRecord::from(self)
    }
}

/// Owned snapshot of a [`Hit`], detached from the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRecord {
    pub category: Category,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl From<&Hit<'_>> for HitRecord {
    fn from(hit: &Hit<'_>) -> Self {
        Self {
            category: hit.category,
            text: hit.as_str().to_string(),
            start: hit.start(),
            end: hit.end(),
        }
    }
}

impl From<Hit<'_>> for HitRecord {
    fn from(hit: Hit<'_>) -> Self {
        HitRecord::from(&hit)
    }
}
