//! Fatal error output

use std::io::Write;

use crossterm::style::Stylize;

use crate::ui::ci::Annotation;
use crate::ui::json::write_event;
use crate::ui::terminal::detect_capabilities;

pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    let prefix = if supports_color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };

    let mut out = format!("{} {}\n", prefix, err);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(hint) = err.downcast_ref::<purposeviz::ReportError>().and_then(hint_for) {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}

fn hint_for(err: &purposeviz::ReportError) -> Option<&'static str> {
    use purposeviz::ReportError;

    match err {
        ReportError::DirectoryNotFound { .. } => {
            Some("pass the directory that holds the purpose .json files")
        }
        ReportError::MissingField { .. } => {
            Some("every purpose with data needs a \"name\"; add one or empty its \"data\"")
        }
        _ => None,
    }
}

/// Write the NDJSON `error` event to `out`, or plain text to `fallback` if
/// that fails.
fn write_error_event(out: &mut impl Write, fallback: &mut impl Write, err: &anyhow::Error) {
    let event = serde_json::json!({
        "event": "error",
        "message": err.to_string(),
    });
    if write_event(out, &event).is_err() {
        let _ = writeln!(fallback, "error: {}", err);
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        write_error_event(&mut std::io::stdout().lock(), &mut std::io::stderr(), err);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_github_actions {
        println!("{}", Annotation::for_error(err));
    }

    eprint!("{}", format_error(err, caps.supports_color));
}
