//! Lane markup
//!
//! One function per kind of lane entry, plus one per lane wrapping them.
//! Identifiers in the markup are the aggregator's purpose ids (`p3`,
//! `p7'`) and 1-based positions for data (`d2`) and recipients (`dr1`).

use crate::domain::entities::{AggregatedModel, Purpose};
use crate::domain::value_objects::DataCategory;
use crate::models::{Flag, Transfer};

use super::escaping::escape_html;

/// Marker appended to the id of a composed purpose
pub const COMPOSED_MARK: &str = "'";

/// Shown when a purpose has no description
pub const EMPTY_DESCRIPTION: &str = "\"\"";

/// Shown for an absent flag or classifier
pub const ABSENT: &str = "null";

/// Whether a purpose is rendered as top-level or composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurposeKind {
    TopLevel,
    Composed,
}

impl PurposeKind {
    fn mark(self) -> &'static str {
        match self {
            PurposeKind::TopLevel => "",
            PurposeKind::Composed => COMPOSED_MARK,
        }
    }
}

/// Table entry for one purpose in the Purposes lane
pub fn render_purpose(purpose: &Purpose, kind: PurposeKind) -> String {
    let mut rows = vec![
        header_row(
            &format!("p{}{}:", purpose.id, kind.mark()),
            purpose.display_name(),
        ),
        key_row("desc", &description_text(purpose)),
        key_row("optOut", &flag_text(purpose.opt_out.as_ref())),
        key_row("required", &flag_text(purpose.required.as_ref())),
        key_row("retention", &purpose.retention.to_string()),
        key_row("pm", &pm_text(purpose.pm.as_ref())),
        key_row("D", &data_names(&purpose.data)),
        key_row("DR", &recipient_names(&purpose.transfers)),
    ];
    if kind == PurposeKind::TopLevel {
        rows.push(key_row("p'", &purpose.purposes.len().to_string()));
    }

    format!(r#"<table class="lane-item">{}</table>"#, rows.concat())
}

/// Table entry for one category in the Data lane; `index` is 0-based
pub fn render_data_category(category: &DataCategory, index: usize) -> String {
    format!(
        r#"<table class="lane-item">{}</table>"#,
        header_row(&format!("d{}:", index + 1), category.display_name())
    )
}

/// Table entry for one recipient in the DataRecipients lane; `index` is 0-based
pub fn render_transfer(transfer: &Transfer, index: usize) -> String {
    format!(
        r#"<table class="lane-item">{}{}</table>"#,
        header_row(&format!("dr{}:", index + 1), &transfer.recipient_id),
        key_row("policyURL", &transfer.policy_url)
    )
}

/// A top-level purpose linked to its kept composed purposes
pub fn render_composed(parent: &Purpose) -> String {
    let top = format!(
        r#"<table class="lane-item composed-parent">{}</table><div class="diamond"></div>"#,
        header_row(&format!("p{}:", parent.id), parent.display_name())
    );

    let children: String = parent
        .purposes
        .iter()
        .map(|child| {
            format!(
                concat!(
                    r#"<div class="cp-container">"#,
                    r#"<div><div class="cp-arrow-top"></div><div class="cp-arrow-bottom"></div></div>"#,
                    r#"<table class="composed-purpose lane-item">{}</table>"#,
                    "</div>"
                ),
                header_row(
                    &format!("p{}{}:", child.id, COMPOSED_MARK),
                    &child.child_label()
                )
            )
        })
        .collect();

    format!("<div>{}<div>{}</div></div>", top, children)
}

/// Purposes lane: top-level purposes first, then every composed purpose
pub fn purposes_lane(model: &AggregatedModel) -> String {
    let entries = model
        .top_purposes
        .iter()
        .map(|p| render_purpose(p, PurposeKind::TopLevel))
        .chain(
            model
                .child_purposes
                .iter()
                .map(|p| render_purpose(p, PurposeKind::Composed)),
        );
    section("lane", "Purposes", entries)
}

pub fn data_lane(model: &AggregatedModel) -> String {
    let entries = model
        .data_categories
        .iter()
        .enumerate()
        .map(|(i, c)| render_data_category(c, i));
    section("lane no-shrink", "Data", entries)
}

pub fn recipients_lane(model: &AggregatedModel) -> String {
    let entries = model
        .transfers
        .iter()
        .enumerate()
        .map(|(i, t)| render_transfer(t, i));
    section("lane", "DataRecipients", entries)
}

pub fn composed_section(model: &AggregatedModel) -> String {
    let entries: String = model.top_purposes.iter().map(render_composed).collect();
    format!("<section><h2>Composed Purposes</h2>{}</section>", entries)
}

fn section(class: &str, heading: &str, entries: impl Iterator<Item = String>) -> String {
    format!(
        r#"<section class="{}"><h2>{}</h2>{}</section>"#,
        class,
        heading,
        entries.collect::<String>()
    )
}

fn header_row(label: &str, name: &str) -> String {
    format!(
        r#"<tr><th colspan="2"><span>{}</span><span> {}</span></th></tr>"#,
        escape_html(label),
        escape_html(name)
    )
}

fn key_row(key: &str, value: &str) -> String {
    format!(
        r#"<tr><td class="key"><em>{}:</em></td><td>{}</td></tr>"#,
        escape_html(key),
        escape_html(value)
    )
}

fn description_text(purpose: &Purpose) -> String {
    purpose
        .description()
        .unwrap_or(EMPTY_DESCRIPTION)
        .to_string()
}

fn flag_text(flag: Option<&Flag>) -> String {
    flag.map_or_else(|| ABSENT.to_string(), Flag::to_string)
}

fn pm_text(pm: Option<&serde_json::Value>) -> String {
    match pm {
        None | Some(serde_json::Value::Null) => ABSENT.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn data_names(data: &[DataCategory]) -> String {
    let names: Vec<&str> = data.iter().map(DataCategory::display_name).collect();
    format!("[{}]", names.join(", "))
}

fn recipient_names(transfers: &[Transfer]) -> String {
    let names: Vec<&str> = transfers.iter().map(|t| t.recipient_id.as_str()).collect();
    format!("[{}]", names.join(", "))
}
