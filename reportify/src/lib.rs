pub mod block;
pub mod directive;
pub mod document;
pub mod parser;

use std::ops::Range;

use crate::directive::Directive;
use crate::document::Metadata;
use crate::parser::ParseError;

/// A scanned, annotated source file.
#[derive(Debug, Clone)]
pub struct Program {
    /// Every source line in order, classified.
    pub lines: Vec<SourceLine>,
    /// Title, author and date gathered from the whole file.
    pub metadata: Metadata,
    /// Non-fatal findings from scanning (metadata overrides, malformed directives).
    pub warnings: Vec<ParseError>,
    /// The source file ID (for error reporting with codespan-reporting).
    pub source_id: usize,
}

/// One line of the annotated source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    /// Line text without its line terminator, otherwise untouched.
    pub text: String,
    /// The directive recognized on this line, if any.
    pub directive: Option<Directive>,
    /// Byte span in source for error reporting.
    pub span: Range<usize>,
}
