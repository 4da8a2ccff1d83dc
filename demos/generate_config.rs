//! Write the default detector configuration to a JSON file
//!
//! Usage: generate_config [path]   (default: detector_config.json)

use std::{env, path::PathBuf, process};

use color_query::DetectorConfig;

fn main() {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("detector_config.json"));

    let config = DetectorConfig::default();
    if let Err(e) = config.to_json_file(&path) {
        eprintln!("Failed to write {}: {}", path.display(), e);
        process::exit(1);
    }
    eprintln!("Wrote default detector config to {}", path.display());
}
