use serde::Deserialize;
use std::path::PathBuf;

// One CSV line: a single bounding box in pixel units and its class label
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnnotationRow {
    pub filename: String,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    #[serde(rename = "class")]
    pub class_name: String,
}

// All rows sharing one image filename, in CSV order
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGroup {
    pub filename: String,
    pub rows: Vec<AnnotationRow>,
}

/// The content of one serialized example, one per image group.
///
/// The per-box vectors (`xmins` through `classes`) always have the same
/// length as the group the record was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub height: u32,
    pub width: u32,
    pub filename: String,
    pub encoded: Vec<u8>,
    pub format: String,
    pub xmins: Vec<f32>,
    pub xmaxs: Vec<f32>,
    pub ymins: Vec<f32>,
    pub ymaxs: Vec<f32>,
    pub classes_text: Vec<Vec<u8>>,
    pub classes: Vec<Option<i64>>,
}

impl OutputRecord {
    /// Number of boxes in the record.
    pub fn num_boxes(&self) -> usize {
        self.classes.len()
    }
}

// Counters reported once the conversion finishes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub rows_loaded: usize,
    pub records_written: usize,
    pub boxes_written: usize,
    pub unknown_class_boxes: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_written(&mut self, record: &OutputRecord) {
        self.records_written += 1;
        self.boxes_written += record.num_boxes();
        self.unknown_class_boxes += record.classes.iter().filter(|id| id.is_none()).count();
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Annotation rows loaded: {}", self.rows_loaded);
        log::info!("Records written: {}", self.records_written);
        log::info!("Boxes written: {}", self.boxes_written);

        if self.unknown_class_boxes > 0 {
            log::warn!(
                "Boxes with a class missing from the class mapping: {} (written with label 0)",
                self.unknown_class_boxes
            );
        }
    }
}

// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub label_map_path: Option<PathBuf>,
    pub stats: ProcessingStats,
}
