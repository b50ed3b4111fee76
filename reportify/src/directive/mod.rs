pub mod header;
pub mod payload;
pub mod sentinel;

pub use payload::{PayloadError, SpanPayload};
pub use sentinel::{Sentinel, SentinelKind};

pub const SECTION_LABEL: &str = "SECTION";
pub const TITLE_LABEL: &str = "TITLE";
pub const AUTHOR_LABEL: &str = "AUTHOR";
pub const DATE_LABEL: &str = "DATE";
pub const SHOW_LABEL: &str = "SHOW";
pub const HIDE_LABEL: &str = "HIDE";
pub const SPAN_LABEL: &str = "SPAN";
pub const CAPTURE_LABEL: &str = "CAPTURE";
pub const OUTPUT_LABEL: &str = "OUTPUT";

/// Prefix of narrative comment lines.
pub const COMMENT_PREFIX: &str = "//!";

/// A marker line in the annotated source that controls document assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `SECTION("title")`
    Section(String),
    /// `//! prose`, prefix stripped and trimmed.
    Comment(String),
    /// `SPAN(...)`: quote an external file. The arguments are read from the
    /// program's output, not from the source.
    Span,
    /// `SHOW`: open a span whose code and output are both shown.
    Show,
    /// `CAPTURE`: open a span whose output alone is shown.
    Capture,
    /// `OUTPUT`: close the open span.
    Output,
    /// `HIDE`: close the open span, keeping the code and dropping the output.
    Hide,
}

impl Directive {
    /// Classify one source line. The line is trimmed first and the first
    /// matching rule wins, so a `SECTION("...")` line is never a comment.
    pub fn classify(line: &str) -> Option<Directive> {
        let line = line.trim();

        if let Some(title) = quoted_argument(line, SECTION_LABEL) {
            return Some(Directive::Section(title.to_string()));
        }
        if let Some(prose) = line.strip_prefix(COMMENT_PREFIX) {
            return Some(Directive::Comment(prose.trim().to_string()));
        }

        if starts_with_token(line, SPAN_LABEL) {
            Some(Directive::Span)
        } else if starts_with_token(line, SHOW_LABEL) {
            Some(Directive::Show)
        } else if starts_with_token(line, CAPTURE_LABEL) {
            Some(Directive::Capture)
        } else if starts_with_token(line, OUTPUT_LABEL) {
            Some(Directive::Output)
        } else if starts_with_token(line, HIDE_LABEL) {
            Some(Directive::Hide)
        } else {
            None
        }
    }
}

/// Document metadata settable from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Title,
    Author,
    Date,
}

impl MetadataField {
    pub const ALL: [MetadataField; 3] = [
        MetadataField::Title,
        MetadataField::Author,
        MetadataField::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetadataField::Title => TITLE_LABEL,
            MetadataField::Author => AUTHOR_LABEL,
            MetadataField::Date => DATE_LABEL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MetadataField::Title => "title",
            MetadataField::Author => "author",
            MetadataField::Date => "date",
        }
    }
}

/// Match `LABEL("literal")` at the start of a trimmed line and return the literal.
/// The literal runs to the last `")` on the line and must not be empty.
pub fn quoted_argument<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let inner = line.strip_prefix(label)?.strip_prefix("(\"")?;
    let end = inner.rfind("\")")?;
    let literal = &inner[..end];
    if literal.is_empty() {
        None
    } else {
        Some(literal)
    }
}

/// True when `line` starts with `label` as a whole token: the next
/// character, if any, is not part of an identifier.
pub fn starts_with_token(line: &str, label: &str) -> bool {
    match line.strip_prefix(label) {
        Some(rest) => !rest.chars().next().is_some_and(is_identifier_char),
        None => false,
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_bare_directives() {
        assert_eq!(Directive::classify("    SHOW;"), Some(Directive::Show));
        assert_eq!(Directive::classify("CAPTURE"), Some(Directive::Capture));
        assert_eq!(Directive::classify("OUTPUT;  "), Some(Directive::Output));
        assert_eq!(Directive::classify("HIDE;"), Some(Directive::Hide));
        assert_eq!(
            Directive::classify(r#"SPAN("Algo", __FILE__, 16, 35);"#),
            Some(Directive::Span)
        );
    }

    #[test]
    fn identifiers_sharing_a_prefix_are_not_directives() {
        assert_eq!(Directive::classify("SHOWCASE();"), None);
        assert_eq!(Directive::classify("OUTPUT_FILE = 3;"), None);
        assert_eq!(Directive::classify("int SHOW = 1;"), None);
    }

    #[test]
    fn section_takes_priority() {
        assert_eq!(
            Directive::classify(r#"  SECTION("i) Evaluate");"#),
            Some(Directive::Section("i) Evaluate".to_string()))
        );
    }

    #[test]
    fn comment_prefix_is_stripped_and_trimmed() {
        assert_eq!(
            Directive::classify("    //!   Some $x$ prose  "),
            Some(Directive::Comment("Some $x$ prose".to_string()))
        );
        assert_eq!(Directive::classify("// plain comment"), None);
    }

    #[test]
    fn quoted_argument_requires_a_literal() {
        assert_eq!(quoted_argument(r#"TITLE("A")"#, TITLE_LABEL), Some("A"));
        assert_eq!(quoted_argument(r#"TITLE("")"#, TITLE_LABEL), None);
        assert_eq!(quoted_argument("TITLE(name)", TITLE_LABEL), None);
        assert_eq!(quoted_argument(r#"AUTHOR("A")"#, TITLE_LABEL), None);
    }
}
