use anyhow::Result;
use clap::Parser;
use log::info;

use csv2tfrecord::{process_dataset, Args};

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = args.to_convert_config();

    info!("Starting the conversion process...");
    let summary = process_dataset(&config)?;

    println!(
        "Successfully created the TFRecords: {}",
        summary.output_path.display()
    );
    if let Some(label_map_path) = &summary.label_map_path {
        println!(
            "Successfully created the label map file: {}",
            label_map_path.display()
        );
    }

    Ok(())
}
