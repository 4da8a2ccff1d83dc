//! Command-line interface for color_query
//!
//! Launcher-style glue around the core: reads a color expression from the
//! command line, interprets it, and prints the result envelope as JSON.
//! Each record carries a shell command that copies the representation to
//! the clipboard and raises a notification; the core itself knows nothing
//! about any of that.

use std::{env, process};

use color_query::{interpret_color, ColorRepresentation};
use serde::Serialize;

/// Block glyphs approximating a color swatch in the launcher row
const PREVIEW: &str = "█████";

/// One row in the launcher result list
#[derive(Debug, Serialize)]
struct ResultRecord {
    title: String,
    subtitle: String,
    command: String,
}

/// The output envelope consumed by the launcher
#[derive(Debug, Serialize)]
struct Envelope {
    results: Vec<ResultRecord>,
}

fn main() {
    let query = env::args().nth(1).unwrap_or_default();

    let envelope = if query.trim().is_empty() {
        prompt_envelope()
    } else {
        match interpret_color(&query) {
            Ok(color) => Envelope {
                results: color
                    .representations
                    .iter()
                    .map(representation_record)
                    .collect(),
            },
            Err(error) => {
                eprintln!("Interpretation failed: {}", error);
                invalid_envelope(error.user_message())
            }
        }
    };

    match serde_json::to_string_pretty(&envelope) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing results: {}", e);
            process::exit(1);
        }
    }
}

fn representation_record(rep: &ColorRepresentation) -> ResultRecord {
    ResultRecord {
        title: format!("{}  {}", PREVIEW, rep.value),
        subtitle: format!("{} • Click to copy", rep.label),
        command: format!(
            "echo -n '{}' | wl-copy && notify-send 'Color Copied' '{}'",
            rep.value, rep.label
        ),
    }
}

fn prompt_envelope() -> Envelope {
    Envelope {
        results: vec![ResultRecord {
            title: "Enter a color...".to_string(),
            subtitle: "Examples: #FF5733, rgb(255,87,51), hsl(9,100%,60%)".to_string(),
            command: "echo 'Enter a color' | wl-copy".to_string(),
        }],
    }
}

fn invalid_envelope(user_message: String) -> Envelope {
    Envelope {
        results: vec![
            ResultRecord {
                title: "Invalid color format".to_string(),
                subtitle: user_message,
                command: "echo 'Invalid color' | wl-copy".to_string(),
            },
            ResultRecord {
                title: "Supported formats:".to_string(),
                subtitle: "#FF5733, rgb(255,87,51), hsl(9,100%,60%)".to_string(),
                command: "echo 'See examples' | wl-copy".to_string(),
            },
        ],
    }
}
