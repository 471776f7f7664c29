use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::classes::ClassMap;

/// Render the class table in the object detection label map text format.
pub fn render_label_map(class_map: &ClassMap) -> String {
    let mut content = String::with_capacity(class_map.len() * 32);
    for (name, id) in class_map.iter() {
        content.push_str(&format!("item {{\n  id: {}\n  name: '{}'\n}}\n", id, name));
    }
    content
}

/// Write the label map for every class in the table, used or not.
pub fn write_label_map(path: &Path, class_map: &ClassMap) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(render_label_map(class_map).as_bytes())?;
    writer.flush()
}
