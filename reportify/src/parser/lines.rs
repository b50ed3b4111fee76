use crate::SourceLine;
use crate::directive::{
    AUTHOR_LABEL, DATE_LABEL, Directive, SECTION_LABEL, TITLE_LABEL, quoted_argument,
};
use crate::parser::error::ParseError;

const QUOTED_LABELS: [&str; 4] = [SECTION_LABEL, TITLE_LABEL, AUTHOR_LABEL, DATE_LABEL];

/// Split source text into classified lines with byte spans.
///
/// Lines are split on `\n`; a `\r` before it is dropped from the line text
/// but stays inside the byte span arithmetic.
pub(crate) fn scan_lines(source: &str, file_id: usize) -> (Vec<SourceLine>, Vec<ParseError>) {
    let mut lines = Vec::new();
    let mut warnings = Vec::new();
    let mut offset = 0;

    for raw in source.split('\n') {
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        let span = offset..offset + text.len();
        offset += raw.len() + 1;

        let directive = Directive::classify(text);
        if directive.is_none() {
            if let Some(label) = malformed_quoted_directive(text) {
                warnings.push(
                    ParseError::warning(
                        format!("{} expects a string literal argument", label),
                        span.clone(),
                        file_id,
                    )
                    .with_note(format!(
                        "write it as {}(\"...\"); this line is treated as ordinary code",
                        label
                    )),
                );
            }
        }

        lines.push(SourceLine {
            text: text.to_string(),
            directive,
            span,
        });
    }

    (lines, warnings)
}

/// A line that opens a quoted-argument directive without a usable literal.
fn malformed_quoted_directive(line: &str) -> Option<&'static str> {
    let line = line.trim();
    QUOTED_LABELS.into_iter().find(|label| {
        line.strip_prefix(label)
            .is_some_and(|rest| rest.starts_with('('))
            && quoted_argument(line, label).is_none()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_line_text() {
        let source = "SHOW;\r\n  x = 1;\nOUTPUT;";
        let (lines, warnings) = scan_lines(source, 0);
        assert!(warnings.is_empty());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "SHOW;");
        assert_eq!(&source[lines[1].span.clone()], "  x = 1;");
        assert_eq!(&source[lines[2].span.clone()], "OUTPUT;");
        assert_eq!(lines[2].directive, Some(Directive::Output));
    }

    #[test]
    fn warns_on_unquoted_section() {
        let (lines, warnings) = scan_lines("SECTION(title);\nTITLE(\"\");\nTITLE(\"ok\");", 3);
        assert_eq!(lines[0].directive, None);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].message.starts_with("SECTION"));
        assert!(warnings[1].message.starts_with("TITLE"));
        assert_eq!(warnings[0].file_id, 3);
        assert!(warnings.iter().all(|w| w.is_warning()));
    }
}
