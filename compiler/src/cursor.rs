use reportify::directive::{Sentinel, SentinelKind};

use crate::error::CompileError;

/// A sentinel located in the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<'a> {
    /// 0-based index of the sentinel line.
    pub index: usize,
    pub payload: &'a str,
}

/// Forward-only cursor over captured program output.
///
/// Every line before `next` has been consumed by an earlier directive and
/// is never examined again.
pub struct OutputCursor<'a> {
    lines: &'a [String],
    next: usize,
    strict: bool,
}

impl<'a> OutputCursor<'a> {
    /// With `strict` set, a directive sentinel of the wrong kind is an error.
    /// Without it, such sentinels are skipped like ordinary output.
    pub fn new(lines: &'a [String], strict: bool) -> Self {
        OutputCursor {
            lines,
            next: 0,
            strict,
        }
    }

    /// Index of the first unconsumed line.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Advance past the next sentinel of kind `expected`.
    ///
    /// Ordinary lines and `SECTION:` sentinels are skipped; section
    /// directives never consume output, so their echoes are noise here.
    pub fn advance_to(&mut self, expected: SentinelKind) -> Result<Found<'a>, CompileError> {
        let lines = self.lines;
        while self.next < lines.len() {
            let index = self.next;
            self.next += 1;

            let Some(sentinel) = Sentinel::parse(&lines[index]) else {
                continue;
            };
            if sentinel.kind == expected {
                return Ok(Found {
                    index,
                    payload: sentinel.payload,
                });
            }
            if self.strict && sentinel.kind != SentinelKind::Section {
                return Err(CompileError::SentinelMismatch {
                    expected,
                    found: sentinel.kind,
                    output_line: index + 1,
                });
            }
        }
        Err(CompileError::SentinelNotFound { expected })
    }

    /// Output lines strictly between two sentinel indices.
    pub fn between(&self, start: usize, end: usize) -> &'a [String] {
        let lines = self.lines;
        &lines[(start + 1).min(end)..end]
    }

    /// Output lines after `start` to the end of the stream.
    pub fn tail_after(&self, start: usize) -> &'a [String] {
        let lines = self.lines;
        &lines[(start + 1).min(lines.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn advances_past_ordinary_output() {
        let output = lines("hello\n\nSHOW\n1\n2\nOUTPUT");
        let mut cursor = OutputCursor::new(&output, true);

        let show = cursor.advance_to(SentinelKind::Show).unwrap();
        assert_eq!(show.index, 2);
        let close = cursor.advance_to(SentinelKind::Output).unwrap();
        assert_eq!(close.index, 5);
        assert_eq!(cursor.between(show.index, close.index), &output[3..5]);
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn never_revisits_a_consumed_sentinel() {
        let output = lines("SPAN: a:f:1:1\nSPAN: b:f:2:2");
        let mut cursor = OutputCursor::new(&output, true);
        assert_eq!(cursor.advance_to(SentinelKind::Span).unwrap().payload, "a:f:1:1");
        assert_eq!(cursor.advance_to(SentinelKind::Span).unwrap().payload, "b:f:2:2");
        assert!(matches!(
            cursor.advance_to(SentinelKind::Span),
            Err(CompileError::SentinelNotFound {
                expected: SentinelKind::Span
            })
        ));
    }

    #[test]
    fn skips_section_echoes_even_when_strict() {
        let output = lines("SECTION: Intro\nSHOW");
        let mut cursor = OutputCursor::new(&output, true);
        assert_eq!(cursor.advance_to(SentinelKind::Show).unwrap().index, 1);
    }

    #[test]
    fn strict_cursor_rejects_the_wrong_sentinel() {
        let output = lines("x\nCAPTURE\nSHOW");
        let mut cursor = OutputCursor::new(&output, true);
        match cursor.advance_to(SentinelKind::Show) {
            Err(CompileError::SentinelMismatch {
                expected,
                found,
                output_line,
            }) => {
                assert_eq!(expected, SentinelKind::Show);
                assert_eq!(found, SentinelKind::Capture);
                assert_eq!(output_line, 2);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn lenient_cursor_skips_the_wrong_sentinel() {
        let output = lines("x\nCAPTURE\nSHOW");
        let mut cursor = OutputCursor::new(&output, false);
        assert_eq!(cursor.advance_to(SentinelKind::Show).unwrap().index, 2);
    }

    #[test]
    fn tail_after_last_line_is_empty() {
        let output = lines("SHOW");
        let cursor = OutputCursor::new(&output, true);
        assert!(cursor.tail_after(0).is_empty());
    }
}
