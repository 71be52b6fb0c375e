//! Text-to-text rewriting rules.
//!
//! These are surface regular expressions, not parsers: an attribute-shaped
//! run of text inside a string literal or comment is stripped like any other,
//! and nested quotes or braces can leave partial matches behind.

use regex::Regex;
use std::sync::LazyLock;

/// `class=` with a double-quoted, single-quoted, or bare value, plus leading whitespace.
static HTML_CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?ix)
        \s* class \s* = \s*
        (?:
            "[^"]*"      # double-quoted
          | '[^']*'      # single-quoted
          | [^\s>]+      # unquoted
        )"#,
    )
    .expect("html class pattern is valid")
});

/// Template rules, applied in this order. `className` goes first; the plain
/// `class` rule is anchored on a word boundary and requires `=` right after the
/// name, so it never eats the prefix of `className`.
static TEMPLATE_RULES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r#"(?i)\s*\bclassName\s*=\s*(?:"[^"]*"|'[^']*'|`[^`]*`)"#,
        r#"(?i)\s*\bclass\s*=\s*(?:"[^"]*"|'[^']*')"#,
        r#"(?is)\s*\bstyle\s*=\s*\{\{.*?\}\}"#,
        r#"(?i)\s*\bstyle\s*=\s*(?:"[^"]*"|'[^']*')"#,
    ]
    .map(|pattern| Regex::new(pattern).expect("template pattern is valid"))
});

/// Remove every `class=...` attribute from HTML text.
///
/// `<div class="a b">` becomes `<div>`.
pub fn remove_html_classes(text: &str) -> String {
    HTML_CLASS_ATTR.replace_all(text, "").into_owned()
}

/// Discard all content.
pub fn clear_content(_text: &str) -> String {
    String::new()
}

/// Remove `className`, `class` and `style` attributes from JS/TS template text.
pub fn remove_js_template_attributes(text: &str) -> String {
    TEMPLATE_RULES
        .iter()
        .fold(text.to_owned(), |acc, rule| rule.replace_all(&acc, "").into_owned())
}

/// A named content rewrite, one per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    StripHtmlClasses,
    Clear,
    StripTemplateAttributes,
}

impl Transform {
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::StripHtmlClasses => remove_html_classes(text),
            Self::Clear => clear_content(text),
            Self::StripTemplateAttributes => remove_js_template_attributes(text),
        }
    }

    /// Whether the output ignores the input, so the file need not be read
    pub fn discards_input(self) -> bool {
        matches!(self, Self::Clear)
    }
}
