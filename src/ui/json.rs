//! NDJSON event output for `--json`.

use std::io::{self, Write};

use serde::Serialize;

/// Event emitted when a run starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub dir: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(dir: &'a str) -> Self {
        Self {
            event: "start",
            dir,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when the report has been written.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub success: bool,
    #[serde(flatten)]
    pub summary: &'a purposeviz::ReportSummary,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(summary: &'a purposeviz::ReportSummary) -> Self {
        Self {
            event: "complete",
            success: true,
            summary,
        }
    }
}

/// Event emitted for a non-fatal configuration warning.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            message: message.into(),
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
