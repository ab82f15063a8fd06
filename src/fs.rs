//! Report file writing

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ReportResult;

/// Write content to a file atomically
///
/// Writes a temp file next to `path` and renames it over the target, so a
/// failed run never leaves a half-written report behind.
pub fn write_atomic(path: &Path, content: &str) -> ReportResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
