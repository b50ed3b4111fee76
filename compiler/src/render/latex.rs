use reportify::block::{Block, Exhibit, ExhibitKind};
use reportify::document::{Document, Metadata};

use crate::render::{Rendered, Style, exhibit_body, missing_title_warning};

const PREAMBLE: &str = r"\documentclass[12pt]{article}
\usepackage[margin=1in]{geometry}
\usepackage[utf8]{inputenc}
\usepackage{minted}
\usepackage[most]{tcolorbox}
\tcbuselibrary{listingsutf8}
\setlength{\parindent}{0pt}
";

/// Render a complete LaTeX article.
pub fn render(document: &Document, style: &Style) -> Rendered {
    let warnings = missing_title_warning(document).into_iter().collect();

    let contents = document
        .blocks
        .iter()
        .map(|block| render_block(block, style))
        .collect::<Vec<_>>()
        .join("\n\n");

    let text = format!(
        "{}\n\\begin{{document}}\n\\begin{{center}}\n{}\n\\end{{center}}\n{}\n\\end{{document}}\n",
        PREAMBLE,
        title_block(&document.metadata),
        contents
    );

    Rendered { text, warnings }
}

fn title_block(metadata: &Metadata) -> String {
    let mut s = String::new();
    if let Some(title) = &metadata.title {
        s.push_str(&format!("{{\\huge {}}}\n\\vspace{{3mm}}\n\n", title));
    }
    if let Some(author) = &metadata.author {
        s.push_str(&format!(
            "{{\\large \\textsl{{{}}}}}\n\\vspace{{1mm}}\n\n",
            author
        ));
    }
    if let Some(date) = &metadata.date {
        s.push_str(date);
        s.push('\n');
    }
    s.push_str("\\vspace{11mm}\n");
    s
}

pub fn render_block(block: &Block, style: &Style) -> String {
    match block {
        Block::Section { title } => format!("\\section*{{{}}}", title),
        Block::Text { content } => content.clone(),
        Block::CodeBox(exhibit) => render_exhibit(exhibit, style.color(ExhibitKind::Code)),
        Block::OutputBox(exhibit) => render_exhibit(exhibit, style.color(ExhibitKind::Output)),
        Block::SpanBox(exhibit) => render_exhibit(exhibit, style.color(ExhibitKind::Span)),
    }
}

/// A titled `tcolorbox` wrapping a `minted` listing.
fn render_exhibit(exhibit: &Exhibit, color: &str) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "\\begin{{tcolorbox}}[enhanced, title=\\hspace{{-10pt}}\\vspace{{-2pt}}{title}\\vphantom{{g}}, \
         colback={color}!10, title style={{baseline}}, boxsep=8pt, coltitle=black, \
         fonttitle=\\bfseries, colbacktitle={color}!30, colframe=black, arc=2mm, \
         boxrule=0.8pt, listing only]",
        title = exhibit.title,
        color = color,
    ));
    s.push_str("\\begin{minted}[fontsize=\\footnotesize, autogobble, numbersep=6pt,");
    if exhibit.line_numbers {
        s.push_str("linenos, ");
    }
    s.push_str(&format!("breaklines, breakanywhere]{{{}}}\n", exhibit.language));
    s.push_str(&exhibit_body(&exhibit.lines));
    s.push_str("\n\\end{minted}\n");
    s.push_str("\\end{tcolorbox}");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn code_box_has_line_numbers_and_language() {
        let block = Block::code(lines(&["int x = 1;"]), "c++");
        let tex = render_block(&block, &Style::default());
        assert!(tex.contains("colback=blue!10"));
        assert!(tex.contains("linenos, breaklines, breakanywhere]{c++}\nint x = 1;\n\\end{minted}"));
        assert!(tex.ends_with("\\end{tcolorbox}"));
    }

    #[test]
    fn output_box_is_plain_text_without_line_numbers() {
        let block = Block::output(lines(&["", "1", ""]));
        let tex = render_block(&block, &Style::default());
        assert!(tex.contains("colback=orange!10"));
        assert!(!tex.contains("linenos"));
        assert!(tex.contains("{text}\n1\n\\end{minted}"));
    }

    #[test]
    fn section_and_text_render_structurally() {
        let style = Style::default();
        assert_eq!(
            render_block(&Block::section("ii) Roots"), &style),
            "\\section*{ii) Roots}"
        );
        assert_eq!(render_block(&Block::text("a\nb"), &style), "a\nb");
    }

    #[test]
    fn title_block_omits_absent_fields() {
        let mut doc = Document::new(Metadata {
            title: Some("Report".to_string()),
            author: None,
            date: Some("today".to_string()),
        });
        doc.push(Block::text("hello"));
        let rendered = render(&doc, &Style::default());
        assert!(rendered.warnings.is_empty());
        assert!(rendered.text.contains("{\\huge Report}"));
        assert!(!rendered.text.contains("textsl"));
        assert!(rendered.text.contains("today\n\\vspace{11mm}"));
        assert!(rendered.text.starts_with("\\documentclass[12pt]{article}"));
        assert!(rendered.text.ends_with("hello\n\\end{document}\n"));
    }

    #[test]
    fn missing_title_warns() {
        let rendered = render(&Document::new(Metadata::default()), &Style::default());
        assert_eq!(rendered.warnings.len(), 1);
        assert!(rendered.warnings[0].is_warning);
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let mut doc = Document::new(Metadata::default());
        doc.push(Block::section("A"));
        doc.push(Block::text("b"));
        let rendered = render(&doc, &Style::default());
        assert!(rendered.text.contains("\\section*{A}\n\nb\n"));
    }
}
