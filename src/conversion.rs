use anyhow::{anyhow, bail, Context, Result};
use log::warn;
use std::io::Cursor;

use crate::classes::ClassMap;
use crate::config::ConvertConfig;
use crate::io::read_image_bytes;
use crate::types::{AnnotationRow, ImageGroup, OutputRecord};
use crate::utils::infer_image_format;

/// Build the output record for one image group.
///
/// The image is read from `<image_dir>/<filename>` and only its header is
/// decoded to find the pixel size; the stored bytes are the file contents.
pub fn build_record(
    group: &ImageGroup,
    config: &ConvertConfig,
    class_map: &ClassMap,
) -> Result<OutputRecord> {
    let encoded = read_image_bytes(&config.image_dir, &group.filename)?;
    let (width, height) = image_dimensions(&encoded)
        .with_context(|| format!("failed to decode image {}", group.filename))?;

    let format = match &config.image_format {
        Some(format) => format.clone(),
        None => detect_format_tag(&encoded)
            .ok_or_else(|| anyhow!("unrecognized image format for {}", group.filename))?,
    };

    let n_boxes = group.rows.len();
    let mut record = OutputRecord {
        height,
        width,
        filename: group.filename.clone(),
        encoded,
        format,
        xmins: Vec::with_capacity(n_boxes),
        xmaxs: Vec::with_capacity(n_boxes),
        ymins: Vec::with_capacity(n_boxes),
        ymaxs: Vec::with_capacity(n_boxes),
        classes_text: Vec::with_capacity(n_boxes),
        classes: Vec::with_capacity(n_boxes),
    };

    for row in &group.rows {
        let [xmin, xmax, ymin, ymax] = normalize_box(row, width, height);
        record.xmins.push(xmin);
        record.xmaxs.push(xmax);
        record.ymins.push(ymin);
        record.ymaxs.push(ymax);

        let class_id = class_map.class_id(&row.class_name);
        if class_id.is_none() {
            if config.strict_classes {
                bail!(
                    "class '{}' in {} is not in the class mapping",
                    row.class_name,
                    group.filename
                );
            }
            warn!(
                "Class '{}' in {} is not in the class mapping",
                row.class_name, group.filename
            );
        }
        record.classes_text.push(row.class_name.as_bytes().to_vec());
        record.classes.push(class_id);
    }

    Ok(record)
}

/// Divide the box edges by the image size. No clamping is applied.
pub fn normalize_box(row: &AnnotationRow, width: u32, height: u32) -> [f32; 4] {
    let width = width as f64;
    let height = height as f64;
    [
        (row.xmin / width) as f32,
        (row.xmax / width) as f32,
        (row.ymin / height) as f32,
        (row.ymax / height) as f32,
    ]
}

/// Read the pixel width and height from the image header.
pub fn image_dimensions(image_bytes: &[u8]) -> image::ImageResult<(u32, u32)> {
    image::ImageReader::new(Cursor::new(image_bytes))
        .with_guessed_format()?
        .into_dimensions()
}

/// Format tag of the encoded bytes, e.g. `jpeg` or `png`.
pub fn detect_format_tag(image_bytes: &[u8]) -> Option<String> {
    if let Some(tag) = infer_image_format(image_bytes) {
        return Some(tag.to_string());
    }
    let format = image::guess_format(image_bytes).ok()?;
    format.extensions_str().first().map(|ext| ext.to_string())
}
