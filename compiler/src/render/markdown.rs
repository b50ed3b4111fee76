use reportify::block::{Block, Exhibit};
use reportify::document::Document;

use crate::render::{Rendered, exhibit_body, missing_title_warning};

/// Render the document as Markdown. Exhibits become fenced code blocks
/// introduced by their bold title; colours do not apply.
pub fn render(document: &Document) -> Rendered {
    let warnings = missing_title_warning(document).into_iter().collect();

    let mut parts = Vec::new();
    let metadata = &document.metadata;
    if let Some(title) = &metadata.title {
        parts.push(format!("# {}", title));
    }
    let byline: Vec<String> = [
        metadata.author.as_ref().map(|a| format!("*{}*", a)),
        metadata.date.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !byline.is_empty() {
        parts.push(byline.join("  \n"));
    }
    parts.extend(document.blocks.iter().map(render_block));

    let mut text = parts.join("\n\n");
    text.push('\n');
    Rendered { text, warnings }
}

pub fn render_block(block: &Block) -> String {
    match block {
        Block::Section { title } => format!("## {}", title),
        Block::Text { content } => content.clone(),
        Block::CodeBox(exhibit) | Block::OutputBox(exhibit) | Block::SpanBox(exhibit) => {
            render_exhibit(exhibit)
        }
    }
}

fn render_exhibit(exhibit: &Exhibit) -> String {
    let body = exhibit_body(&exhibit.lines);
    let fence = fence_for(&body);
    let mut s = String::new();
    s.push_str(&format!("**{}**\n\n", exhibit.title));
    s.push_str(&format!("{}{}\n", fence, exhibit.language));
    if !body.is_empty() {
        s.push_str(&format!("{}\n", body));
    }
    s.push_str(&fence);
    s
}

/// A backtick fence longer than any backtick run inside the body.
fn fence_for(body: &str) -> String {
    let longest = body
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportify::document::Metadata;

    #[test]
    fn exhibits_become_fenced_blocks() {
        let block = Block::code(vec!["int x = 1;".to_string()], "c++");
        assert_eq!(render_block(&block), "**Code**\n\n```c++\nint x = 1;\n```");
    }

    #[test]
    fn fence_outgrows_backticks_in_body() {
        let block = Block::output(vec!["```".to_string()]);
        assert_eq!(render_block(&block), "**Output**\n\n````text\n```\n````");
    }

    #[test]
    fn header_lists_present_metadata() {
        let doc = Document::new(Metadata {
            title: Some("Report".to_string()),
            author: Some("Ada".to_string()),
            date: None,
        });
        let rendered = render(&doc);
        assert_eq!(rendered.text, "# Report\n\n*Ada*\n");
        assert!(rendered.warnings.is_empty());
    }
}
