use crate::block::Block;

/// Title, author and date of a document. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// A compiled report: metadata plus blocks in source-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub metadata: Metadata,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(metadata: Metadata) -> Self {
        Document {
            metadata,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append a line of narrative prose.
    ///
    /// When `contiguous` is set (the previous source line was also a comment)
    /// and the last block is `Text`, the line is joined onto it with a newline.
    /// Otherwise a new `Text` block is started.
    pub fn push_text(&mut self, line: &str, contiguous: bool) {
        if contiguous {
            if let Some(Block::Text { content }) = self.blocks.last_mut() {
                content.push('\n');
                content.push_str(line);
                return;
            }
        }
        self.blocks.push(Block::text(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_text_merges() {
        let mut doc = Document::new(Metadata::default());
        doc.push_text("first", false);
        doc.push_text("second", true);
        assert_eq!(doc.blocks, vec![Block::text("first\nsecond")]);
    }

    #[test]
    fn separated_text_starts_new_block() {
        let mut doc = Document::new(Metadata::default());
        doc.push_text("first", false);
        doc.push_text("second", false);
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn text_never_merges_into_other_blocks() {
        let mut doc = Document::new(Metadata::default());
        doc.push(Block::section("Intro"));
        doc.push_text("body", true);
        assert_eq!(
            doc.blocks,
            vec![Block::section("Intro"), Block::text("body")]
        );
    }
}
