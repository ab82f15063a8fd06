//! Document assembly

use crate::domain::entities::AggregatedModel;

use super::escaping::escape_html;
use super::lanes;

/// What the document needs besides the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    /// Stylesheet href, relative to the report
    pub stylesheet: String,
}

impl RenderOptions {
    pub fn new(title: impl Into<String>, stylesheet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: stylesheet.into(),
        }
    }
}

/// A rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}

impl Document {
    pub fn as_str(&self) -> &str {
        &self.html
    }
}

/// Render the whole report
pub fn render(model: &AggregatedModel, options: &RenderOptions) -> Document {
    let title = escape_html(&options.title);
    let html = format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"{stylesheet}\">\n",
            "</head>\n",
            "<body>\n",
            "<main>",
            "<h1>{title}</h1>",
            "<div class=\"lanes\">{purposes}{data}{recipients}</div>",
            "{composed}",
            "</main>\n",
            "</body>\n",
            "</html>\n"
        ),
        title = title,
        stylesheet = escape_html(&options.stylesheet),
        purposes = lanes::purposes_lane(model),
        data = lanes::data_lane(model),
        recipients = lanes::recipients_lane(model),
        composed = lanes::composed_section(model),
    );

    Document { html }
}
