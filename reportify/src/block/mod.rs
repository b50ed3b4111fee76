pub mod exhibit;

pub use exhibit::{Exhibit, ExhibitKind};

/// Language tag given to captured program output.
pub const OUTPUT_LANGUAGE: &str = "text";

/// One typed unit of document content.
/// Blocks appear in the order of the directive or comment that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A heading. Has no body.
    Section { title: String },
    /// Narrative prose, one or more comment lines joined by newlines.
    Text { content: String },
    /// Source lines shown between a `SHOW` and its closing directive.
    CodeBox(Exhibit),
    /// Program output captured between two sentinels.
    OutputBox(Exhibit),
    /// Lines quoted from an external file.
    SpanBox(Exhibit),
}

impl Block {
    pub fn section(title: impl Into<String>) -> Self {
        Block::Section {
            title: title.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Block::Text {
            content: content.into(),
        }
    }

    pub fn code(lines: Vec<String>, language: impl Into<String>) -> Self {
        Block::CodeBox(Exhibit {
            title: "Code".to_string(),
            lines,
            language: language.into(),
            line_numbers: true,
        })
    }

    pub fn output(lines: Vec<String>) -> Self {
        Block::OutputBox(Exhibit {
            title: "Output".to_string(),
            lines,
            language: OUTPUT_LANGUAGE.to_string(),
            line_numbers: false,
        })
    }

    pub fn span(title: impl Into<String>, lines: Vec<String>, language: impl Into<String>) -> Self {
        Block::SpanBox(Exhibit {
            title: title.into(),
            lines,
            language: language.into(),
            line_numbers: true,
        })
    }

    /// Short lowercase name of the variant: `section`, `text`, `code`, `output` or `span`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Section { .. } => "section",
            Block::Text { .. } => "text",
            Block::CodeBox(_) => "code",
            Block::OutputBox(_) => "output",
            Block::SpanBox(_) => "span",
        }
    }
}
