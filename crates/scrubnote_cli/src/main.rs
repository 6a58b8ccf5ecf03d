//! CLI probe for the de-identification pipeline.
//!
//! # Responsibility
//! - Feed stdin text through the pipeline for quick local sanity checks.
//! - Keep output deterministic so runs can be diffed.

use scrubnote_core::{
    apply_safety_net, default_log_level, highlight_changes, init_logging, redact_note,
    DiffSegmentKind, NoteDocument,
};
use std::io::Read;

const USAGE: &str = "usage: scrubnote_cli [--diff | --safety-net | --version]";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = match args.first().map(String::as_str) {
        None => Mode::Redact,
        Some("--diff") => Mode::Diff,
        Some("--safety-net") => Mode::SafetyNet,
        Some("--version") => {
            println!("scrubnote_core version={}", scrubnote_core::core_version());
            return;
        }
        Some(other) => {
            eprintln!("unknown flag `{other}`\n{USAGE}");
            std::process::exit(2);
        }
    };

    if let Ok(log_dir) = std::env::var("SCRUBNOTE_LOG_DIR") {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {err}");
        std::process::exit(1);
    }

    let note = NoteDocument::new("stdin", input);
    match mode {
        Mode::Redact => println!("{}", redact_note(&note).note.text),
        Mode::SafetyNet => println!("{}", apply_safety_net(&note).text),
        Mode::Diff => {
            let redacted = redact_note(&note);
            for segment in highlight_changes(&note.text, &redacted.note.text) {
                let kind = match segment.kind {
                    DiffSegmentKind::Same => "same",
                    DiffSegmentKind::Changed => "changed",
                };
                println!("{kind}\t{}", segment.text);
            }
        }
    }
}

enum Mode {
    Redact,
    Diff,
    SafetyNet,
}
