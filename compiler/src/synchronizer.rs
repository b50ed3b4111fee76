use std::mem;
use std::ops::Range;
use std::path::PathBuf;

use reportify::block::Block;
use reportify::directive::{Directive, SentinelKind, SpanPayload};
use reportify::document::Document;
use reportify::{Program, SourceLine};

use crate::cursor::OutputCursor;
use crate::error::{CompileError, DiagnosticError};
use crate::span::resolve_span;

/// Highlighting language for shown code and quoted spans.
pub const DEFAULT_CODE_LANGUAGE: &str = "c++";

/// Settings for one compilation pass.
#[derive(Debug, Clone)]
pub struct Options {
    /// Fail when a directive sentinel of the wrong kind appears in the output.
    pub strict: bool,
    /// Directory that relative `SPAN` file paths are resolved against.
    pub base_dir: PathBuf,
    /// Language tag for `CodeBox` and `SpanBox` exhibits.
    pub code_language: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            strict: true,
            base_dir: PathBuf::from("."),
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
        }
    }
}

/// The region opened by `SHOW` or `CAPTURE` and not yet closed.
/// Positions are indices of the directive line and of its sentinel line.
#[derive(Debug)]
enum SpanState {
    Idle,
    Showing {
        /// The `SHOW` line, or the last prose line that split the listing.
        code_start: usize,
        output_start: usize,
        opened_at: Range<usize>,
        /// Set once prose has split the listing; later blank-only pieces are dropped.
        split: bool,
    },
    Capturing {
        output_start: usize,
        opened_at: Range<usize>,
    },
}

impl SpanState {
    fn opened_at(&self) -> Option<&Range<usize>> {
        match self {
            SpanState::Idle => None,
            SpanState::Showing { opened_at, .. } | SpanState::Capturing { opened_at, .. } => {
                Some(opened_at)
            }
        }
    }
}

/// Compile a scanned program against its captured output with default options.
pub fn compile(
    program: &Program,
    output: &str,
) -> Result<(Document, Vec<DiagnosticError>), DiagnosticError> {
    compile_with_options(program, output, &Options::default())
}

/// Walk the source once, pulling output lines forward as directives demand,
/// and build the document. Returns the document plus any warnings.
pub fn compile_with_options(
    program: &Program,
    output: &str,
    options: &Options,
) -> Result<(Document, Vec<DiagnosticError>), DiagnosticError> {
    let output_lines: Vec<String> = output.lines().map(str::to_string).collect();
    let sync = Synchronizer {
        program,
        options,
        cursor: OutputCursor::new(&output_lines, options.strict),
        state: SpanState::Idle,
        last_comment: None,
        document: Document::new(program.metadata.clone()),
        warnings: Vec::new(),
    };
    sync.run()
}

struct Synchronizer<'a> {
    program: &'a Program,
    options: &'a Options,
    cursor: OutputCursor<'a>,
    state: SpanState,
    /// Index of the most recent comment line, for merging prose.
    last_comment: Option<usize>,
    document: Document,
    warnings: Vec<DiagnosticError>,
}

impl<'a> Synchronizer<'a> {
    fn run(mut self) -> Result<(Document, Vec<DiagnosticError>), DiagnosticError> {
        let program = self.program;
        for (index, line) in program.lines.iter().enumerate() {
            let Some(directive) = &line.directive else {
                continue;
            };
            self.step(index, line, directive)
                .map_err(|e| DiagnosticError::at(e, line.span.clone(), program.source_id))?;
        }
        self.flush_tail();
        Ok((self.document, self.warnings))
    }

    fn step(
        &mut self,
        index: usize,
        line: &SourceLine,
        directive: &Directive,
    ) -> Result<(), CompileError> {
        match directive {
            Directive::Section(title) => self.document.push(Block::section(title.clone())),
            Directive::Comment(prose) => {
                self.split_listing(index);
                let contiguous = self.last_comment.is_some_and(|previous| previous + 1 == index);
                self.document.push_text(prose, contiguous);
                self.last_comment = Some(index);
            }
            Directive::Span => {
                let found = self.cursor.advance_to(SentinelKind::Span)?;
                let payload =
                    SpanPayload::parse(found.payload).map_err(|reason| {
                        CompileError::MalformedSpan {
                            payload: found.payload.to_string(),
                            reason,
                        }
                    })?;
                let block =
                    resolve_span(&payload, &self.options.base_dir, &self.options.code_language)?;
                self.document.push(block);
            }
            Directive::Show => {
                let found = self.cursor.advance_to(SentinelKind::Show)?;
                self.open(SpanState::Showing {
                    code_start: index,
                    output_start: found.index,
                    opened_at: line.span.clone(),
                    split: false,
                });
            }
            Directive::Capture => {
                let found = self.cursor.advance_to(SentinelKind::Capture)?;
                self.open(SpanState::Capturing {
                    output_start: found.index,
                    opened_at: line.span.clone(),
                });
            }
            Directive::Output => {
                let found = self.cursor.advance_to(SentinelKind::Output)?;
                self.close(line, index, found.index, true);
            }
            Directive::Hide => {
                let found = self.cursor.advance_to(SentinelKind::Hide)?;
                self.close(line, index, found.index, false);
            }
        }
        Ok(())
    }

    /// Start a new span. A span that is still open is dropped.
    fn open(&mut self, next: SpanState) {
        if let Some(previous) = self.state.opened_at() {
            self.warnings.push(DiagnosticError::warning(
                "span reopened before it was closed; its lines are not shown".to_string(),
                previous.clone(),
                self.program.source_id,
            ));
        }
        self.state = next;
    }

    /// Prose inside a `SHOW` span ends the listing shown so far. The span stays
    /// open and its next listing starts after the prose line, so the comment
    /// never lands inside a `CodeBox`. Output is still emitted at the close.
    fn split_listing(&mut self, index: usize) {
        let program = self.program;
        let shown = match &mut self.state {
            SpanState::Showing {
                code_start, split, ..
            } => {
                let shown = &program.lines[*code_start + 1..index];
                *code_start = index;
                *split = true;
                shown
            }
            SpanState::Idle | SpanState::Capturing { .. } => return,
        };
        if !is_blank(shown) {
            self.push_code(shown);
        }
    }

    /// Close the open span at source line `source_end` and output line `output_end`.
    fn close(&mut self, line: &SourceLine, source_end: usize, output_end: usize, keep_output: bool) {
        let program = self.program;
        match mem::replace(&mut self.state, SpanState::Idle) {
            SpanState::Idle => self.warnings.push(DiagnosticError::warning(
                "no SHOW or CAPTURE is open here; nothing to close".to_string(),
                line.span.clone(),
                program.source_id,
            )),
            SpanState::Showing {
                code_start,
                output_start,
                split,
                ..
            } => {
                self.push_listing(&program.lines[code_start + 1..source_end], split);
                if keep_output {
                    let output = self.cursor.between(output_start, output_end);
                    self.push_output(output);
                }
            }
            SpanState::Capturing { output_start, .. } => {
                if keep_output {
                    let output = self.cursor.between(output_start, output_end);
                    self.push_output(output);
                }
            }
        }
    }

    /// An unterminated span runs to the end of both streams.
    fn flush_tail(&mut self) {
        let program = self.program;
        match mem::replace(&mut self.state, SpanState::Idle) {
            SpanState::Idle => {}
            SpanState::Showing {
                code_start,
                output_start,
                split,
                ..
            } => {
                self.push_listing(&program.lines[code_start + 1..], split);
                let output = self.cursor.tail_after(output_start);
                self.push_output(output);
            }
            SpanState::Capturing { output_start, .. } => {
                let output = self.cursor.tail_after(output_start);
                self.push_output(output);
            }
        }
    }

    /// The last piece of a split listing is dropped when it holds no code.
    fn push_listing(&mut self, lines: &[SourceLine], split: bool) {
        if !(split && is_blank(lines)) {
            self.push_code(lines);
        }
    }

    fn push_code(&mut self, lines: &[SourceLine]) {
        let code = lines.iter().map(|line| line.text.clone()).collect();
        self.document
            .push(Block::code(code, self.options.code_language.clone()));
    }

    fn push_output(&mut self, lines: &[String]) {
        self.document.push(Block::output(lines.to_vec()));
    }
}

fn is_blank(lines: &[SourceLine]) -> bool {
    lines.iter().all(|line| line.text.trim().is_empty())
}
