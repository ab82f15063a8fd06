//! GitHub Actions workflow annotations
//!
//! Under Actions, fatal errors and config warnings are also printed as
//! workflow commands (`::error file=...,line=...::message`) so they show up
//! inline on the offending purpose or config file.

use std::fmt;
use std::path::Path;

use purposeviz::config::ConfigWarning;
use purposeviz::ReportError;

const TITLE: &str = "purposeviz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

impl AnnotationLevel {
    fn as_str(self) -> &'static str {
        match self {
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Error => "error",
        }
    }
}

/// One workflow command, rendered through `Display`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub level: AnnotationLevel,
    pub message: String,
    pub file: Option<String>,
    pub line: Option<usize>,
}

impl Annotation {
    /// Annotation for a fatal error, pointing at the purpose file when known
    pub fn for_error(err: &anyhow::Error) -> Self {
        let report_err = err.downcast_ref::<ReportError>();
        Self {
            level: AnnotationLevel::Error,
            message: err.to_string(),
            file: report_err.and_then(ReportError::file).map(display_path),
            line: report_err.and_then(ReportError::line),
        }
    }

    pub fn for_config_warning(warning: &ConfigWarning) -> Self {
        Self {
            level: AnnotationLevel::Warning,
            message: warning.to_string(),
            file: Some(display_path(&warning.file)),
            line: warning.line,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut props = Vec::new();
        if let Some(file) = &self.file {
            props.push(format!("file={}", escape_property(file)));
        }
        if let Some(line) = self.line {
            props.push(format!("line={}", line));
        }
        props.push(format!("title={}", TITLE));

        write!(
            f,
            "::{} {}::{}",
            self.level.as_str(),
            props.join(","),
            escape_data(&self.message)
        )
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
