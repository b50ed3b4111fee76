use std::fmt;

/// Arguments of a `SPAN` sentinel: `title:file:start:end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanPayload {
    pub title: String,
    pub file: String,
    /// 1-based, inclusive.
    pub start: usize,
    /// 1-based, inclusive.
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload did not split into exactly four fields.
    FieldCount(usize),
    /// A line bound was not a non-negative integer.
    Bound(String),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::FieldCount(n) => write!(
                f,
                "expected 4 fields (title:file:start:end), found {}",
                n
            ),
            PayloadError::Bound(text) => write!(f, "invalid line number '{}'", text),
        }
    }
}

impl std::error::Error for PayloadError {}

impl SpanPayload {
    pub fn parse(payload: &str) -> Result<Self, PayloadError> {
        let fields: Vec<&str> = payload.split(':').collect();
        let [title, file, start, end] = fields.as_slice() else {
            return Err(PayloadError::FieldCount(fields.len()));
        };
        Ok(SpanPayload {
            title: title.to_string(),
            file: file.to_string(),
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }
}

fn parse_bound(text: &str) -> Result<usize, PayloadError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| PayloadError::Bound(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_fields() {
        let payload = SpanPayload::parse("Example:foo.c:3:5").unwrap();
        assert_eq!(
            payload,
            SpanPayload {
                title: "Example".to_string(),
                file: "foo.c".to_string(),
                start: 3,
                end: 5,
            }
        );
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            SpanPayload::parse("Example:foo.c:3"),
            Err(PayloadError::FieldCount(3))
        );
        assert_eq!(
            SpanPayload::parse("A: b:c:d.c:1:2"),
            Err(PayloadError::FieldCount(6))
        );
    }

    #[test]
    fn rejects_non_numeric_bounds() {
        assert_eq!(
            SpanPayload::parse("Example:foo.c:three:5"),
            Err(PayloadError::Bound("three".to_string()))
        );
    }
}
