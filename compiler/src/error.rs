use std::fmt;
use std::ops::Range;

use reportify::directive::{PayloadError, SentinelKind};

#[derive(Debug)]
pub enum CompileError {
    /// The output ran out before the expected sentinel appeared.
    SentinelNotFound { expected: SentinelKind },
    /// A different directive sentinel stood where the expected one should be.
    SentinelMismatch {
        expected: SentinelKind,
        found: SentinelKind,
        /// 1-based line number in the program output.
        output_line: usize,
    },
    MalformedSpan {
        payload: String,
        reason: PayloadError,
    },
    SpanFileNotFound { path: String, reason: String },
    SpanOutOfRange {
        path: String,
        start: usize,
        end: usize,
        available: usize,
    },
    IoError(String),
    Custom(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::SentinelNotFound { expected } => write!(
                f,
                "unmatched sentinel: program output ended before {} was printed",
                expected
            ),
            CompileError::SentinelMismatch {
                expected,
                found,
                output_line,
            } => write!(
                f,
                "sentinel mismatch: expected {} but output line {} is {}",
                expected, output_line, found
            ),
            CompileError::MalformedSpan { payload, reason } => {
                write!(f, "malformed SPAN payload '{}': {}", payload, reason)
            }
            CompileError::SpanFileNotFound { path, reason } => {
                write!(f, "cannot read span file '{}': {}", path, reason)
            }
            CompileError::SpanOutOfRange {
                path,
                start,
                end,
                available,
            } => write!(
                f,
                "span {}-{} is out of range for '{}' ({} lines)",
                start, end, path, available
            ),
            CompileError::IoError(msg) => write!(f, "I/O error: {}", msg),
            CompileError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CompileError {}

/// A compile error or warning enriched with source location information.
#[derive(Debug)]
pub struct DiagnosticError {
    pub error: CompileError,
    pub span: Option<Range<usize>>,
    pub source_id: usize,
    pub is_warning: bool,
}

impl DiagnosticError {
    /// Create a warning diagnostic with a source span.
    pub fn warning(message: String, span: Range<usize>, source_id: usize) -> Self {
        DiagnosticError {
            error: CompileError::Custom(message),
            span: Some(span),
            source_id,
            is_warning: true,
        }
    }

    /// Create a warning that belongs to no particular source line.
    pub fn unlocated_warning(message: String) -> Self {
        DiagnosticError {
            error: CompileError::Custom(message),
            span: None,
            source_id: 0,
            is_warning: true,
        }
    }

    /// Attach the span of the directive that triggered the error.
    pub fn at(error: CompileError, span: Range<usize>, source_id: usize) -> Self {
        DiagnosticError {
            error,
            span: Some(span),
            source_id,
            is_warning: false,
        }
    }
}

impl fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for DiagnosticError {}
