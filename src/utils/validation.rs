// file: src/utils/validation.rs
// description: input validation for text handed to the extractors
// reference: input validation patterns

use crate::error::{Result, ScanError};
use std::fs;
use std::io::Read;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            ScanError::InvalidInput(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(ScanError::InvalidInput(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_input_size(size: usize, limit: usize) -> Result<()> {
        if size > limit {
            return Err(ScanError::InputTooLarge { size, limit });
        }
        Ok(())
    }

    /// Text must be UTF-8; anything else is rejected rather than lossily decoded.
    pub fn decode_text(bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|e| {
            ScanError::InvalidInput(format!(
                "input is not valid UTF-8 at byte {}",
                e.utf8_error().valid_up_to()
            ))
        })
    }

    /// Reads at most `limit + 1` bytes so oversized input is detected without
    /// buffering all of it.
    pub fn read_text<R: Read>(reader: R, limit: usize) -> Result<String> {
        let mut bytes = Vec::new();
        reader
            .take(limit as u64 + 1)
            .read_to_end(&mut bytes)?;

        Self::validate_input_size(bytes.len(), limit)?;
        Self::decode_text(bytes)
    }

    pub fn read_file(path: &Path, limit: usize) -> Result<String> {
        Self::validate_file_path(path)?;

        let size = fs::metadata(path)?.len() as usize;
        Self::validate_input_size(size, limit)?;

        Self::read_text(fs::File::open(path)?, limit)
    }
}
