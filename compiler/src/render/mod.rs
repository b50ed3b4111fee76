pub mod latex;
pub mod markdown;

use reportify::block::ExhibitKind;
use reportify::document::Document;

use crate::error::DiagnosticError;

/// Target markup for a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Latex,
    Markdown,
}

/// Presentation settings shared by the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub code_color: String,
    pub output_color: String,
    pub span_color: String,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            code_color: "blue".to_string(),
            output_color: "orange".to_string(),
            span_color: "green".to_string(),
        }
    }
}

impl Style {
    pub fn color(&self, kind: ExhibitKind) -> &str {
        match kind {
            ExhibitKind::Code => &self.code_color,
            ExhibitKind::Output => &self.output_color,
            ExhibitKind::Span => &self.span_color,
        }
    }
}

/// Rendered markup plus the warnings raised while producing it.
#[derive(Debug)]
pub struct Rendered {
    pub text: String,
    pub warnings: Vec<DiagnosticError>,
}

/// Serialize `document` into the chosen markup.
pub fn render(document: &Document, format: Format, style: &Style) -> Rendered {
    match format {
        Format::Latex => latex::render(document, style),
        Format::Markdown => markdown::render(document),
    }
}

/// Exhibit body as one string, without leading or trailing newlines.
pub(crate) fn exhibit_body(lines: &[String]) -> String {
    lines.join("\n").trim_matches('\n').to_string()
}

pub(crate) fn missing_title_warning(document: &Document) -> Option<DiagnosticError> {
    match document.metadata.title {
        Some(_) => None,
        None => Some(DiagnosticError::unlocated_warning(
            "no title set; add TITLE(\"...\") to the source".to_string(),
        )),
    }
}
