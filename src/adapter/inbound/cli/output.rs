//! Terminal rendering for CLI commands.
//!
//! Every handler prints through these helpers so the global `--json` and
//! `--quiet` flags apply uniformly. JSON mode writes exactly one document
//! per command to stdout; diagnostics and errors always go to stderr.

use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use alloy_primitives::Address;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum OutputMode {
    /// Colored text with headers and tables.
    #[default]
    Pretty = 0,
    /// Warnings and errors only.
    Quiet = 1,
    /// A single JSON document on stdout.
    Json = 2,
}

impl OutputMode {
    /// Mode selected by the global flags. `--json` wins over `--quiet`.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Quiet,
            (false, false) => Self::Pretty,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Quiet,
            2 => Self::Json,
            _ => Self::Pretty,
        }
    }
}

static MODE: AtomicU8 = AtomicU8::new(OutputMode::Pretty as u8);

/// Set the process-wide output mode.
pub fn set_mode(mode: OutputMode) {
    MODE.store(mode as u8, Ordering::Relaxed);
}

#[must_use]
pub fn mode() -> OutputMode {
    OutputMode::from_u8(MODE.load(Ordering::Relaxed))
}

#[must_use]
pub fn is_json() -> bool {
    mode() == OutputMode::Json
}

#[must_use]
pub fn is_quiet() -> bool {
    mode() == OutputMode::Quiet
}

fn pretty() -> bool {
    mode() == OutputMode::Pretty
}

/// `vaultsnap <version>` followed by a blank line.
pub fn banner() {
    if pretty() {
        println!("{} {}", "vaultsnap".bold(), env!("CARGO_PKG_VERSION").dimmed());
        println!();
    }
}

pub fn section(title: &str) {
    if pretty() {
        println!();
        println!("{}", title.bold());
    }
}

/// Aligned `label value` line.
pub fn field(label: &str, value: impl Display) {
    if pretty() {
        println!("  {:<18} {}", label.dimmed(), value);
    }
}

pub fn success(message: &str) {
    if pretty() {
        println!("  {} {}", "✓".green(), message);
    }
}

/// Shown in quiet mode too.
pub fn warning(message: &str) {
    if !is_json() {
        eprintln!("  {} {}", "!".yellow().bold(), message);
    }
}

/// Report a failed command on stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "error": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

pub fn note(message: &str) {
    if pretty() {
        println!("  {}", message.dimmed());
    }
}

/// Indented multi-line block, e.g. a rendered table.
pub fn block(content: &str) {
    if pretty() {
        for line in content.lines() {
            println!("  {line}");
        }
    }
}

/// Checksummed address, or a dimmed `unset` for the zero address.
#[must_use]
pub fn address(address: Address) -> String {
    if address.is_zero() {
        format!("{}", "unset".dimmed())
    } else {
        format!("{}", address.to_checksum(None).cyan())
    }
}

/// Address as a JSON value: checksummed string, `null` when unset.
#[must_use]
pub fn address_json(address: Address) -> Value {
    if address.is_zero() {
        Value::Null
    } else {
        Value::String(address.to_checksum(None))
    }
}

const SPINNER_FRAMES: &[&str] = &[
    "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
];

/// Spinner on stderr while a remote read runs. Hidden unless pretty.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = if pretty() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(SPINNER_FRAMES)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    if pretty() {
        pb.enable_steady_tick(Duration::from_millis(80));
    }
    pb
}

pub fn finish_ok(pb: &ProgressBar, message: &str) {
    if pretty() {
        pb.finish_with_message(format!("{} {}", "✓".green(), message));
    } else {
        pb.finish_and_clear();
    }
}

pub fn finish_err(pb: &ProgressBar, message: &str) {
    if pretty() {
        pb.finish_with_message(format!("{} {}", "×".red(), message));
    } else {
        pb.finish_and_clear();
    }
}

/// The JSON result document of `command`, with `body`'s fields merged in.
pub fn document(command: &str, body: Value) {
    let mut doc = serde_json::Map::new();
    doc.insert("command".to_string(), Value::String(command.to_string()));
    if let Value::Object(fields) = body {
        doc.extend(fields);
    }
    println!("{}", Value::Object(doc));
}
