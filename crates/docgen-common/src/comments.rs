//! Docblock comment framing.
//!
//! Documentation comments arrive from the source parser as raw text,
//! including the `/** .. */` delimiters and the decorative `*` column. The
//! parser only wants the content, so the framing is stripped here.

/// Check if a raw comment is a documentation comment.
///
/// A docblock starts with exactly `/**` (a `/***` banner is not one).
pub fn is_doc_comment(text: &str) -> bool {
    text.starts_with("/**") && !text.starts_with("/***")
}

/// Extract the content of a docblock (without the delimiters).
///
/// Removes the `/**` and `*/` delimiters and the leading `*` from each
/// line, preserving line structure so tag continuation lines survive.
/// Text that does not carry the delimiters is returned as-is, which lets
/// callers pass pre-stripped content through unchanged.
pub fn doc_comment_content(text: &str) -> String {
    // Source parsers commonly hand over the comment with its trailing
    // newline still attached.
    let text = text.trim_end();
    let inner = if text.starts_with("/**") && text.ends_with("*/") && text.len() >= 5 {
        &text[3..text.len() - 2]
    } else {
        text
    };

    inner
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if let Some(rest) = trimmed.strip_prefix('*') {
                rest.strip_prefix(' ').unwrap_or(rest)
            } else {
                trimmed
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_doc_comments() {
        assert!(is_doc_comment("/** @var int */"));
        assert!(!is_doc_comment("/* plain */"));
        assert!(!is_doc_comment("/*** banner */"));
    }

    #[test]
    fn strips_frame_and_star_column() {
        let raw = "/**\n * Summary line.\n *\n * @param int $x\n */";
        assert_eq!(
            doc_comment_content(raw),
            "Summary line.\n\n@param int $x"
        );
    }

    #[test]
    fn single_line_docblock() {
        assert_eq!(doc_comment_content("/** @var int */"), "@var int");
    }

    #[test]
    fn pre_stripped_content_passes_through() {
        assert_eq!(doc_comment_content("@var int"), "@var int");
    }

    #[test]
    fn trailing_newline_does_not_keep_the_frame() {
        let with_newline = "/**\n * Summary.\n *\n * @param int $x\n */\n";
        let without = "/**\n * Summary.\n *\n * @param int $x\n */";
        assert_eq!(doc_comment_content(with_newline), doc_comment_content(without));
        assert_eq!(doc_comment_content("/** @var int */\n"), "@var int");
    }
}
