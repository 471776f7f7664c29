use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::info;

use crate::classes::ClassMap;
use crate::config::ConvertConfig;
use crate::conversion::build_record;
use crate::io::load_annotations;
use crate::label_map::write_label_map;
use crate::record_writer::TfRecordSink;
use crate::types::{AnnotationRow, ConversionSummary, ImageGroup, ProcessingStats};
use crate::utils::{absolute_path, create_progress_bar};

/// Group rows by filename, keeping the order in which filenames first appear
pub fn group_annotations(rows: Vec<AnnotationRow>) -> Vec<ImageGroup> {
    let mut groups: IndexMap<String, Vec<AnnotationRow>> = IndexMap::new();
    for row in rows {
        groups.entry(row.filename.clone()).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|(filename, rows)| ImageGroup { filename, rows })
        .collect()
}

/// Main conversion pipeline: load, group, build and write each record, then
/// emit the label map when a path is configured.
pub fn process_dataset(config: &ConvertConfig) -> Result<ConversionSummary> {
    let class_map = ClassMap::default();
    let mut stats = ProcessingStats::new();

    let mut sink = TfRecordSink::create(&config.output_path)?;

    let rows = load_annotations(&config.csv_input)?;
    stats.rows_loaded = rows.len();
    let groups = group_annotations(rows);
    info!(
        "Loaded {} annotation rows for {} images.",
        stats.rows_loaded,
        groups.len()
    );

    let pb = create_progress_bar(groups.len() as u64, "Records");
    for group in &groups {
        let record = build_record(group, config, &class_map)?;
        sink.write(&record)?;
        stats.record_written(&record);
        pb.inc(1);
    }
    sink.finish()?;
    pb.finish_with_message("Record writing complete");
    stats.print_summary();

    let output_path = absolute_path(&config.output_path)
        .context("failed to resolve the current working directory")?;

    let label_map_path = match &config.label_map_output_path {
        Some(path) => {
            info!("Creating label map file...");
            write_label_map(path, &class_map)
                .with_context(|| format!("failed to write label map {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(ConversionSummary {
        output_path,
        label_map_path,
        stats,
    })
}
