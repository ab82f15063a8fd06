//! Purpose file loader
//!
//! Reads the `*.json` purpose declarations directly inside a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::RawPurposeRecord;

/// Extension of purpose declaration files
pub const PURPOSE_FILE_EXTENSION: &str = "json";

/// Parse purpose JSON into a raw record
///
/// `file` is only used for error reporting.
pub fn parse_record(json: &str, file: &Path) -> ReportResult<RawPurposeRecord> {
    serde_json::from_str(json).map_err(|e| ReportError::InvalidRecord {
        file: file.to_path_buf(),
        line: (e.line() > 0).then(|| e.line()),
        message: format_json_error(json, &e),
    })
}

/// Parse a single purpose file
pub fn parse_file(path: &Path) -> ReportResult<RawPurposeRecord> {
    let content = fs::read_to_string(path).map_err(|source| read_error(path, source))?;
    let mut record = parse_record(&content, path)?;
    record.source = Some(path.to_path_buf());
    Ok(record)
}

/// Load every purpose file directly inside `dir` (no recursion)
///
/// Files are read in file-name order so the same directory always produces
/// the same report.
pub fn load_directory(dir: &Path) -> ReportResult<Vec<RawPurposeRecord>> {
    if !dir.is_dir() {
        return Err(ReportError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let files = purpose_files(dir)?;
    let mut records = Vec::with_capacity(files.len());
    for path in files {
        debug!(file = %path.display(), "loading purpose file");
        records.push(parse_file(&path)?);
    }

    Ok(records)
}

/// Purpose files directly inside `dir`, sorted by file name
pub fn purpose_files(dir: &Path) -> ReportResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir).map_err(|source| read_error(dir, source))?;
    for entry in entries {
        let entry = entry.map_err(|source| read_error(dir, source))?;
        let path = entry.path();

        if !path.is_file() || is_hidden(&path) {
            continue;
        }
        if path.extension().map(|e| e == PURPOSE_FILE_EXTENSION).unwrap_or(false) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn read_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::ReadFile {
        path: path.to_path_buf(),
        source,
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

fn format_json_error(json: &str, err: &serde_json::Error) -> String {
    let mut message = String::new();

    if err.line() > 0 {
        message.push_str(&format!(
            "Line {}, column {}: {}",
            err.line(),
            err.column(),
            describe_category(err)
        ));
    } else {
        message.push_str(&describe_category(err));
    }

    if let Some(line) = json.lines().nth(err.line().saturating_sub(1)) {
        let line = line.trim();
        if !line.is_empty() && err.line() > 0 {
            message.push_str(&format!("\n  {}", line));
        }
    }

    if should_hint_trailing_comma(json, err) {
        message.push_str("\nHint: JSON does not allow a trailing comma before '}' or ']'");
    }

    message
}

fn describe_category(err: &serde_json::Error) -> String {
    use serde_json::error::Category;

    // serde_json appends " at line X column Y"; the location is reported separately.
    let text = err.to_string();
    let text = match text.rfind(" at line ") {
        Some(i) => text[..i].to_string(),
        None => text,
    };

    match err.classify() {
        Category::Syntax => format!("invalid JSON - {}", text),
        Category::Data => format!("unexpected record shape - {}", text),
        Category::Eof => "unexpected end of file".to_string(),
        Category::Io => text,
    }
}

fn should_hint_trailing_comma(json: &str, err: &serde_json::Error) -> bool {
    err.is_syntax() && {
        let compact: String = json.chars().filter(|c| !c.is_whitespace()).collect();
        compact.contains(",}") || compact.contains(",]")
    }
}
