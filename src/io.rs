use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::AnnotationRow;

/// Read every annotation row from the CSV file, in file order.
///
/// Columns are matched by header name, so additional columns such as
/// `width` or `height` are ignored.
pub fn load_annotations(csv_path: &Path) -> Result<Vec<AnnotationRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open CSV input {}", csv_path.display()))?;

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<AnnotationRow>, _>>()
        .with_context(|| format!("failed to parse CSV input {}", csv_path.display()))?;

    Ok(rows)
}

/// Path of an image referenced by the CSV.
pub fn image_path(image_dir: &Path, filename: &str) -> PathBuf {
    image_dir.join(filename)
}

/// Read the encoded image bytes as stored on disk.
pub fn read_image_bytes(image_dir: &Path, filename: &str) -> Result<Vec<u8>> {
    let path = image_path(image_dir, filename);
    fs::read(&path).with_context(|| format!("failed to read image {}", path.display()))
}
