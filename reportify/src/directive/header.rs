use crate::directive::{
    AUTHOR_LABEL, CAPTURE_LABEL, DATE_LABEL, HIDE_LABEL, OUTPUT_LABEL, SECTION_LABEL, SHOW_LABEL,
    SPAN_LABEL, TITLE_LABEL,
};

/// The C++ header that instruments a program: one macro per directive, each
/// printing its sentinel line to standard output. Metadata macros expand to nothing.
pub fn generate() -> String {
    let lines = [
        format!(r#"#define {SECTION_LABEL}(S) std::cout << "\n{SECTION_LABEL}: " << (S) << std::endl;"#),
        format!("#define {TITLE_LABEL}(S)"),
        format!("#define {AUTHOR_LABEL}(S)"),
        format!("#define {DATE_LABEL}(S)"),
        bare_macro(SHOW_LABEL),
        bare_macro(HIDE_LABEL),
        bare_macro(CAPTURE_LABEL),
        bare_macro(OUTPUT_LABEL),
        format!(
            r#"#define {SPAN_LABEL}(TITLE, FILE, START, END) std::cout << "\n{SPAN_LABEL}: " << (TITLE) << ":" << (FILE) << ":" << (START) << ":" << (END) << std::endl;"#
        ),
    ];
    lines.join("\n")
}

fn bare_macro(label: &str) -> String {
    format!(r#"#define {label} std::cout << "\n{label}" << std::endl;"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defines_one_macro_per_directive() {
        let header = generate();
        assert_eq!(header.lines().count(), 9);
        assert!(header.lines().all(|l| l.starts_with("#define ")));
        assert!(header.contains(r#"#define SHOW std::cout << "\nSHOW" << std::endl;"#));
        assert!(header.contains("#define TITLE(S)\n"));
        assert!(header.contains(r#"<< "\nSPAN: " << (TITLE) << ":" << (FILE)"#));
    }
}
