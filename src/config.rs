use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for converting CSV annotations to a TFRecord file.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Path to the CSV input
    #[arg(long = "csv_input")]
    pub csv_input: String,

    /// Path to output TFRecord
    #[arg(long = "output_path")]
    pub output_path: String,

    /// Path to images
    #[arg(long = "image_dir")]
    pub image_dir: String,

    /// Path to output label map; skipped when empty
    #[arg(long = "label_map_output_path", default_value = "")]
    pub label_map_output_path: String,

    /// Value written to image/format instead of the tag detected from the image bytes
    #[arg(long = "image_format")]
    pub image_format: Option<String>,

    /// Abort on class labels missing from the class mapping
    #[arg(long = "strict_classes")]
    pub strict_classes: bool,
}

impl Args {
    /// Convert the parsed flags into the configuration handed to the pipeline.
    pub fn to_convert_config(&self) -> ConvertConfig {
        let label_map_output_path = if self.label_map_output_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.label_map_output_path))
        };

        let image_format = self
            .image_format
            .as_ref()
            .filter(|format| !format.is_empty())
            .cloned();

        ConvertConfig {
            csv_input: PathBuf::from(&self.csv_input),
            output_path: PathBuf::from(&self.output_path),
            image_dir: PathBuf::from(&self.image_dir),
            label_map_output_path,
            image_format,
            strict_classes: self.strict_classes,
        }
    }
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub csv_input: PathBuf,
    pub output_path: PathBuf,
    pub image_dir: PathBuf,
    pub label_map_output_path: Option<PathBuf>,
    pub image_format: Option<String>,
    pub strict_classes: bool,
}

impl ConvertConfig {
    /// Create a lenient configuration with the format tag read from each image.
    pub fn new(
        csv_input: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        image_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            csv_input: csv_input.into(),
            output_path: output_path.into(),
            image_dir: image_dir.into(),
            label_map_output_path: None,
            image_format: None,
            strict_classes: false,
        }
    }

    pub fn with_label_map(mut self, path: impl Into<PathBuf>) -> Self {
        self.label_map_output_path = Some(path.into());
        self
    }

    pub fn with_image_format(mut self, format: impl Into<String>) -> Self {
        self.image_format = Some(format.into());
        self
    }

    pub fn with_strict_classes(mut self, strict: bool) -> Self {
        self.strict_classes = strict;
        self
    }
}
