/// Modifiers dropped before looking for a `class`/`interface` keyword.
const STRIPPED_KEYWORDS: [&str; 6] = [
    "static",
    "abstract",
    "final",
    "public",
    "private",
    "protected",
];

const LINE_COMMENT: &str = "//";
const BLOCK_COMMENT_START: &str = "/*";
const BLOCK_COMMENT_END: &str = "*/";
const ANNOTATION: &str = "@";
const DEPRECATED_ANNOTATION: &str = "@deprecated";

/// A source line reduced to the two forms the classifier inspects.
///
/// `text` is the lower-cased line with every leading and trailing char up to
/// U+0020 removed (control chars included, NBSP kept). `stripped` additionally has every
/// space and every modifier keyword removed, and is only used to recognise
/// declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    text: String,
    stripped: String,
}

impl NormalizedLine {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let text = raw.trim_matches(|c: char| c <= ' ').to_lowercase();
        let stripped = STRIPPED_KEYWORDS
            .iter()
            .fold(text.replace(' ', ""), |acc, keyword| acc.replace(keyword, ""));
        Self { text, stripped }
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn stripped(&self) -> &str {
        &self.stripped
    }

    /// A `class` or `interface` declaration.
    ///
    /// Lines containing `()` are rejected so that method signatures such as
    /// `public Class<?> getSource() {` are not mistaken for declarations.
    #[must_use]
    pub fn is_declaration(&self) -> bool {
        (self.stripped.starts_with("class") || self.stripped.starts_with("interface"))
            && !self.stripped.contains("()")
    }

    /// Whether this line ends the "just after a comment" status.
    ///
    /// Blank lines, further comments and annotations keep it alive.
    #[must_use]
    pub fn ends_comment_block(&self) -> bool {
        !self.text.is_empty()
            && !self.text.starts_with(LINE_COMMENT)
            && !self.text.starts_with(BLOCK_COMMENT_START)
            && !self.text.starts_with(ANNOTATION)
    }

    #[must_use]
    pub fn is_block_comment_start(&self) -> bool {
        self.text.starts_with(BLOCK_COMMENT_START)
    }

    #[must_use]
    pub fn is_block_comment_end(&self) -> bool {
        self.text.ends_with(BLOCK_COMMENT_END)
    }

    #[must_use]
    pub fn is_line_comment(&self) -> bool {
        self.text.starts_with(LINE_COMMENT)
    }

    #[must_use]
    pub fn is_deprecated_annotation(&self) -> bool {
        self.text.starts_with(DEPRECATED_ANNOTATION)
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
