//! CSV annotations to TFRecord converter
//!
//! This library converts bounding-box annotations stored in a CSV file, together
//! with the images they refer to, into a TFRecord file of `tf.train.Example`s
//! for object detection training, plus a label map text file.

pub mod classes;
pub mod config;
pub mod conversion;
pub mod dataset;
pub mod io;
pub mod label_map;
pub mod record_writer;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use classes::{ClassMap, CLASS_TABLE};
pub use config::{Args, ConvertConfig};
pub use conversion::build_record;
pub use dataset::{group_annotations, process_dataset};
pub use io::load_annotations;
pub use label_map::write_label_map;
pub use record_writer::{to_example, TfRecordSink};
pub use types::{AnnotationRow, ConversionSummary, ImageGroup, OutputRecord, ProcessingStats};
