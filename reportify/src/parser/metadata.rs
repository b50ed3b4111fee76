use crate::SourceLine;
use crate::directive::{MetadataField, quoted_argument};
use crate::document::Metadata;
use crate::parser::error::ParseError;

/// Collect `TITLE`, `AUTHOR` and `DATE` directives from every line.
///
/// A later directive overrides an earlier one; each override is reported
/// as a warning naming the old and the new value.
pub fn gather_metadata(lines: &[SourceLine], file_id: usize) -> (Metadata, Vec<ParseError>) {
    let mut metadata = Metadata::default();
    let mut warnings = Vec::new();

    for line in lines {
        let text = line.text.trim();
        for field in MetadataField::ALL {
            let Some(value) = quoted_argument(text, field.label()) else {
                continue;
            };
            if let Some(previous) = slot(&mut metadata, field).replace(value.to_string()) {
                warnings.push(ParseError::warning(
                    format!(
                        "{} already set to '{}'; overriding with '{}'",
                        field.name(),
                        previous,
                        value
                    ),
                    line.span.clone(),
                    file_id,
                ));
            }
        }
    }

    (metadata, warnings)
}

fn slot(metadata: &mut Metadata, field: MetadataField) -> &mut Option<String> {
    match field {
        MetadataField::Title => &mut metadata.title,
        MetadataField::Author => &mut metadata.author,
        MetadataField::Date => &mut metadata.date,
    }
}
