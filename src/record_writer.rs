//! Serialization of output records into a TFRecord file of `tf.train.Example`s.

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tfrecord::protobuf::{
    feature::Kind, BytesList, Example, Feature, Features, FloatList, Int64List,
};
use tfrecord::{ExampleWriter, RecordWriter};

use crate::types::OutputRecord;

/// Label written for a box whose class is not in the class mapping.
pub const MISSING_CLASS_ID: i64 = 0;

pub const HEIGHT_KEY: &str = "image/height";
pub const WIDTH_KEY: &str = "image/width";
pub const FILENAME_KEY: &str = "image/filename";
pub const SOURCE_ID_KEY: &str = "image/source_id";
pub const ENCODED_KEY: &str = "image/encoded";
pub const FORMAT_KEY: &str = "image/format";
pub const XMIN_KEY: &str = "image/object/bbox/xmin";
pub const XMAX_KEY: &str = "image/object/bbox/xmax";
pub const YMIN_KEY: &str = "image/object/bbox/ymin";
pub const YMAX_KEY: &str = "image/object/bbox/ymax";
pub const CLASS_TEXT_KEY: &str = "image/object/class/text";
pub const CLASS_LABEL_KEY: &str = "image/object/class/label";

fn int64_feature(values: Vec<i64>) -> Feature {
    Feature {
        kind: Some(Kind::Int64List(Int64List { value: values })),
    }
}

fn float_feature(values: Vec<f32>) -> Feature {
    Feature {
        kind: Some(Kind::FloatList(FloatList { value: values })),
    }
}

fn bytes_feature(values: Vec<Vec<u8>>) -> Feature {
    Feature {
        kind: Some(Kind::BytesList(BytesList { value: values })),
    }
}

/// Build the `tf.train.Example` for one record.
pub fn to_example(record: &OutputRecord) -> Example {
    let filename = record.filename.as_bytes().to_vec();
    let labels = record
        .classes
        .iter()
        .map(|id| id.unwrap_or(MISSING_CLASS_ID))
        .collect();

    let feature: HashMap<String, Feature> = [
        (HEIGHT_KEY, int64_feature(vec![record.height as i64])),
        (WIDTH_KEY, int64_feature(vec![record.width as i64])),
        (FILENAME_KEY, bytes_feature(vec![filename.clone()])),
        (SOURCE_ID_KEY, bytes_feature(vec![filename])),
        (ENCODED_KEY, bytes_feature(vec![record.encoded.clone()])),
        (
            FORMAT_KEY,
            bytes_feature(vec![record.format.as_bytes().to_vec()]),
        ),
        (XMIN_KEY, float_feature(record.xmins.clone())),
        (XMAX_KEY, float_feature(record.xmaxs.clone())),
        (YMIN_KEY, float_feature(record.ymins.clone())),
        (YMAX_KEY, float_feature(record.ymaxs.clone())),
        (CLASS_TEXT_KEY, bytes_feature(record.classes_text.clone())),
        (CLASS_LABEL_KEY, int64_feature(labels)),
    ]
    .into_iter()
    .map(|(key, feature)| (key.to_string(), feature))
    .collect();

    Example {
        features: Some(Features { feature }),
    }
}

/// Appends examples to a single TFRecord file in the order they are given.
///
/// Records handed to the sink before a failure may already be on disk; the
/// file is only complete once [`TfRecordSink::finish`] returns.
pub struct TfRecordSink {
    writer: ExampleWriter<BufWriter<File>>,
    path: PathBuf,
    written: usize,
}

impl TfRecordSink {
    pub fn create(path: &Path) -> Result<Self> {
        let writer = RecordWriter::create(path)
            .with_context(|| format!("failed to create TFRecord file {}", path.display()))?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
            written: 0,
        })
    }

    pub fn write(&mut self, record: &OutputRecord) -> Result<()> {
        self.writer
            .send(to_example(record))
            .with_context(|| format!("failed to write record for {}", record.filename))?;
        self.written += 1;
        debug!(
            "Wrote record {} ({} boxes) to {}",
            record.filename,
            record.num_boxes(),
            self.path.display()
        );
        Ok(())
    }

    /// Flush and close the file, returning the number of records written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .with_context(|| format!("failed to flush TFRecord file {}", self.path.display()))?;
        Ok(self.written)
    }
}
