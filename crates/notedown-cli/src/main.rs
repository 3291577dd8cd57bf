use anyhow::Result;
use notedown_config::{Config, OutputFormat};
use notedown_engine::{convert, render_html, to_plain_text};
use std::{env, fs, path::PathBuf, process};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <note.md> [--tree | --html | --plain]");
    eprintln!();
    eprintln!("Converts a markdown note and prints the selected projection:");
    eprintln!("  --tree   document tree as editor JSON (default)");
    eprintln!("  --html   sanitized display HTML");
    eprintln!("  --plain  plain text as indexed for search");
    eprintln!();
    eprintln!(
        "Relative note names are resolved against notes_path from {}",
        Config::config_path().display()
    );
    process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut note: Option<PathBuf> = None;
    let mut format: Option<OutputFormat> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--tree" => format = Some(OutputFormat::Tree),
            "--html" => format = Some(OutputFormat::Html),
            "--plain" => format = Some(OutputFormat::Plain),
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown flag '{flag}'");
                usage(&args[0]);
            }
            path if note.is_none() => note = Some(PathBuf::from(path)),
            _ => usage(&args[0]),
        }
    }
    let Some(note) = note else {
        usage(&args[0]);
    };

    // Config supplies the notes directory and the default projection.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let format = format
        .or(config.as_ref().map(|c| c.output_format))
        .unwrap_or_default();

    let path = resolve_note_path(note, config.as_ref());
    let markdown = match fs::read_to_string(&path) {
        Ok(markdown) => markdown,
        Err(e) => {
            eprintln!("Error: Cannot read note '{}': {e}", path.display());
            process::exit(1);
        }
    };

    match format {
        OutputFormat::Tree => println!("{}", serde_json::to_string_pretty(&convert(&markdown))?),
        OutputFormat::Html => println!("{}", render_html(&markdown)),
        OutputFormat::Plain => println!("{}", to_plain_text(&markdown)),
    }

    Ok(())
}

/// A note that does not exist as given is retried under the configured
/// notes directory, so `notedown-cli inbox.md` works from anywhere.
fn resolve_note_path(note: PathBuf, config: Option<&Config>) -> PathBuf {
    if note.exists() {
        return note;
    }
    if let Some(config) = config
        && note.is_relative()
    {
        let under_notes = config.notes_path.join(&note);
        if under_notes.exists() {
            return under_notes;
        }
    }
    note
}
