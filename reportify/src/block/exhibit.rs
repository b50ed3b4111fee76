/// Body of a boxed block: a titled listing of lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhibit {
    pub title: String,
    pub lines: Vec<String>,
    /// Highlighting language tag (`c++`, `text`, ...).
    pub language: String,
    pub line_numbers: bool,
}

/// Category of an exhibit. Renderers pick colours by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExhibitKind {
    Code,
    Output,
    Span,
}
