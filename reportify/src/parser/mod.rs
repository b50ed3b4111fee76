pub mod error;
pub mod metadata;
mod lines;

pub use error::ParseError;

use crate::Program;

/// Scanner entry point.
pub struct Parser {
    source: String,
    file_id: usize,
}

impl Parser {
    pub fn new(source: String, file_id: usize) -> Self {
        Parser { source, file_id }
    }

    /// Classify every source line and gather document metadata.
    /// Scanning never fails; suspicious lines are reported as warnings.
    pub fn parse(&self) -> Program {
        let (lines, mut warnings) = lines::scan_lines(&self.source, self.file_id);
        let (metadata, metadata_warnings) = metadata::gather_metadata(&lines, self.file_id);
        warnings.extend(metadata_warnings);
        warnings.sort_by_key(|w| w.span.start);

        Program {
            lines,
            metadata,
            warnings,
            source_id: self.file_id,
        }
    }
}
