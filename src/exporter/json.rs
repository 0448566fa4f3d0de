// file: src/exporter/json.rs
// description: json export of extraction hits

use crate::error::Result;
use crate::extractor::count_by_category;
use crate::models::{Category, HitRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub source: String,
    pub exported_at: String,
    pub total_hits: usize,
    pub counts_by_category: BTreeMap<Category, usize>,
    pub hits: Vec<HitRecord>,
}

impl ExportReport {
    pub fn new(source: impl Into<String>, hits: Vec<HitRecord>) -> Self {
        Self {
            source: source.into(),
            exported_at: Utc::now().to_rfc3339(),
            total_hits: hits.len(),
            counts_by_category: count_by_category(&hits),
            hits,
        }
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes `<stem>.hits.json` and returns its path.
    pub fn export(&self, source: &str, hits: &[HitRecord], pretty: bool) -> Result<PathBuf> {
        info!("Starting JSON export to {:?}", self.output_dir);

        let report = ExportReport::new(source, hits.to_vec());
        let json = render(&report, pretty)?;

        let stem = Path::new(source)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("stdin");
        let path = self.output_dir.join(format!("{}.hits.json", stem));
        fs::write(&path, json)?;

        info!(
            "Export complete: {} hits written to {}",
            report.total_hits,
            path.display()
        );
        Ok(path)
    }
}

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
