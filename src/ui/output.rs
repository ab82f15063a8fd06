//! Human-readable output

use purposeviz::config::ConfigWarning;
use purposeviz::ReportSummary;

use crate::ui::ci::Annotation;
use crate::ui::terminal::detect_capabilities;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    let annotate = detect_capabilities().is_github_actions;
    for w in warnings {
        tracing::warn!("{}", w);
        if annotate {
            println!("{}", Annotation::for_config_warning(w));
        }
    }
}

pub fn render_summary(summary: &ReportSummary) -> String {
    format!(
        "Loaded {} purpose file{}: {} purposes, {} composed, {} data categories, {} recipients\nWrote {}",
        summary.records,
        if summary.records == 1 { "" } else { "s" },
        summary.purposes,
        summary.composed_purposes,
        summary.data_categories,
        summary.recipients,
        summary.report.display()
    )
}
