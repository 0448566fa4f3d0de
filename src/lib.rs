// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod utils;

pub use config::{Config, OutputConfig, OutputFormat, ScanConfig};
pub use error::{Result, ScanError};
pub use exporter::{ExportReport, JsonExporter};
pub use extractor::{
    dates_fmt2, dates_iso8601, integers, is_float_fragment, mixed_ordinals, numbers_fmt1, scan,
    scan_all, Extractor, ExtractorFn, ExtractorKind, Hits, PatternKind, PatternRegistry,
    WholeWord,
};
pub use models::{Category, Hit, HitRecord};
pub use utils::Validator;
