// file: src/extractor/mod.rs
// description: extraction engine module exports
// reference: internal module structure

pub mod boundary;
pub mod numeric;
pub mod patterns;
pub mod scan;
pub mod temporal;

pub use boundary::{WholeWord, WholeWordMatches};
pub use numeric::{integers, is_float_fragment, mixed_ordinals, numbers_fmt1};
pub use patterns::{PatternKind, PatternRegistry};
pub use scan::{
    count_by_category, scan, scan_all, Extractor, ExtractorFn, ExtractorKind, Hits, Scan,
};
pub use temporal::{dates_fmt2, dates_iso8601};
