use std::fmt;

use crate::directive::{
    CAPTURE_LABEL, HIDE_LABEL, OUTPUT_LABEL, SECTION_LABEL, SHOW_LABEL, SPAN_LABEL,
    starts_with_token,
};

/// The kinds of marker line an instrumented program prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelKind {
    Section,
    Show,
    Capture,
    Output,
    Hide,
    Span,
}

impl SentinelKind {
    pub fn label(self) -> &'static str {
        match self {
            SentinelKind::Section => SECTION_LABEL,
            SentinelKind::Show => SHOW_LABEL,
            SentinelKind::Capture => CAPTURE_LABEL,
            SentinelKind::Output => OUTPUT_LABEL,
            SentinelKind::Hide => HIDE_LABEL,
            SentinelKind::Span => SPAN_LABEL,
        }
    }

    /// Whether this sentinel carries a `: payload` after its label.
    pub fn has_payload(self) -> bool {
        matches!(self, SentinelKind::Section | SentinelKind::Span)
    }
}

impl fmt::Display for SentinelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recognized sentinel line from the program output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel<'a> {
    pub kind: SentinelKind,
    /// Text after `LABEL:`, trimmed. Empty for bare sentinels.
    pub payload: &'a str,
}

impl<'a> Sentinel<'a> {
    const KINDS: [SentinelKind; 6] = [
        SentinelKind::Section,
        SentinelKind::Span,
        SentinelKind::Show,
        SentinelKind::Capture,
        SentinelKind::Output,
        SentinelKind::Hide,
    ];

    /// Recognize a sentinel in one output line (trimmed before matching).
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        for kind in Self::KINDS {
            if kind.has_payload() {
                let payload = line
                    .strip_prefix(kind.label())
                    .and_then(|rest| rest.strip_prefix(':'));
                if let Some(payload) = payload {
                    return Some(Sentinel {
                        kind,
                        payload: payload.trim(),
                    });
                }
            } else if starts_with_token(line, kind.label()) {
                return Some(Sentinel { kind, payload: "" });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_sentinels() {
        let sentinel = Sentinel::parse("SHOW").unwrap();
        assert_eq!(sentinel.kind, SentinelKind::Show);
        assert_eq!(sentinel.payload, "");
        assert_eq!(
            Sentinel::parse("  OUTPUT  ").map(|s| s.kind),
            Some(SentinelKind::Output)
        );
    }

    #[test]
    fn parses_payload_sentinels() {
        let sentinel = Sentinel::parse("SPAN: Example:foo.c:3:5").unwrap();
        assert_eq!(sentinel.kind, SentinelKind::Span);
        assert_eq!(sentinel.payload, "Example:foo.c:3:5");

        let sentinel = Sentinel::parse("SECTION: ii) Find the root").unwrap();
        assert_eq!(sentinel.kind, SentinelKind::Section);
        assert_eq!(sentinel.payload, "ii) Find the root");
    }

    #[test]
    fn ordinary_output_is_not_a_sentinel() {
        assert_eq!(Sentinel::parse("x1 = 0.25"), None);
        assert_eq!(Sentinel::parse("SHOWING results"), None);
        assert_eq!(Sentinel::parse("SPANISH"), None);
        assert_eq!(Sentinel::parse(""), None);
    }
}
