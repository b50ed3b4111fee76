use std::io;
use std::path::Path;

use reportify::block::Block;
use reportify::directive::SpanPayload;

use crate::error::CompileError;

/// Cut lines `start..=end` (1-based) out of an external file as a `SpanBox`.
///
/// The file is read fresh on every call. Relative paths are resolved
/// against `base_dir`. Line terminators are stripped, blank lines at
/// either edge of the range are dropped, and a range reaching past the
/// end of the file is an error rather than being truncated.
pub fn resolve_span(
    payload: &SpanPayload,
    base_dir: &Path,
    language: &str,
) -> Result<Block, CompileError> {
    let path = base_dir.join(&payload.file);
    let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CompileError::SpanFileNotFound {
            path: payload.file.clone(),
            reason: e.to_string(),
        },
        _ => CompileError::IoError(format!("cannot read '{}': {}", path.display(), e)),
    })?;

    let lines: Vec<&str> = content.lines().collect();
    let (start, end) = (payload.start, payload.end);
    if start == 0 || start > end || end > lines.len() {
        return Err(CompileError::SpanOutOfRange {
            path: payload.file.clone(),
            start,
            end,
            available: lines.len(),
        });
    }

    let body = trim_blank_lines(&lines[start - 1..end])
        .iter()
        .map(|line| line.to_string())
        .collect();
    Ok(Block::span(payload.title.clone(), body, language))
}

/// Drop whitespace-only lines from both ends of `lines`.
pub fn trim_blank_lines<S: AsRef<str>>(lines: &[S]) -> &[S] {
    let is_blank = |line: &S| line.as_ref().trim().is_empty();
    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return &lines[..0];
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
    &lines[first..=last]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_blank_edges_only() {
        let lines = ["", "  ", "a", "", "b", "\t", ""];
        assert_eq!(trim_blank_lines(&lines), &["a", "", "b"]);
    }

    #[test]
    fn all_blank_trims_to_nothing() {
        let lines = ["", " "];
        assert!(trim_blank_lines(&lines).is_empty());
        let none: [&str; 0] = [];
        assert!(trim_blank_lines(&none).is_empty());
    }
}
