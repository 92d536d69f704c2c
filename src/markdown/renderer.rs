//! Markdown subset to HTML conversion.

use regex::Regex;
use std::sync::LazyLock;

use super::emphasis::emphasize;

static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?R)\*\*(.+?)\*\*").expect("bold pattern is valid"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?R)__(.+?)__").expect("bold pattern is valid"));
static H4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^### (.+)$").expect("header pattern is valid"));
static H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^## (.+)$").expect("header pattern is valid"));
static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^- (.+)$").expect("bullet pattern is valid"));
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^[0-9]+\. (.+)$").expect("numbered pattern is valid"));
static LIST_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<li>.*</li>").expect("list run pattern is valid"));

/// Renders generated analysis text to an HTML fragment.
///
/// Applies a fixed sequence of text rewrites. Each stage operates on the
/// output of the previous one, so the order below is part of the contract:
///
/// 1. `**x**` and `__x__` become `<strong>x</strong>`
/// 2. single `*x*` and `_x_` become `<em>x</em>`
/// 3. `### x` and `## x` lines become `<h4>` and `<h3>`
/// 4. `- x` lines become `<li>x</li>`
/// 5. `N. x` lines become `<li>x</li>` (numbered lists only)
/// 6. the first run of list items is wrapped once in `<ul>`
/// 7. blank lines become `</p><p>`
/// 8. remaining newlines become `<br>`, except between two list items
/// 9. the result is wrapped in `<p>`
///
/// Rendering never fails. Input outside the supported subset passes through
/// partially converted. Text is not HTML escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    numbered_lists: bool,
}

impl TextRenderer {
    /// Creates renderer, optionally converting `N. ` lines to list items.
    pub fn new(numbered_lists: bool) -> Self {
        Self { numbered_lists }
    }

    /// Renderer for skill match analysis text (numbered lists enabled).
    pub fn analysis() -> Self {
        Self::new(true)
    }

    /// Renderer for bias report text (numbered lists disabled).
    pub fn bias_report() -> Self {
        Self::new(false)
    }

    /// Returns whether numbered lines are converted to list items.
    pub fn numbered_lists(&self) -> bool {
        self.numbered_lists
    }

    /// Renders text to an HTML fragment enclosed in exactly one `<p>`.
    ///
    /// # Arguments
    ///
    /// * `text`: Markdown subset text, possibly empty
    ///
    /// # Returns
    ///
    /// HTML fragment string
    pub fn render(&self, text: &str) -> String {
        let mut html = bold(text);
        html = italic(&html);
        html = headers(&html);
        html = bullet_items(&html);
        if self.numbered_lists {
            html = numbered_items(&html);
        }
        html = wrap_first_list(&html);
        html = paragraph_breaks(&html);
        html = line_breaks(&html);

        format!("<p>{}</p>", html)
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::analysis()
    }
}

fn bold(text: &str) -> String {
    let html = BOLD_STARS.replace_all(text, "<strong>${1}</strong>");
    BOLD_UNDERSCORES
        .replace_all(&html, "<strong>${1}</strong>")
        .into_owned()
}

/// Runs after `bold`, so only delimiters left over from it are considered.
fn italic(text: &str) -> String {
    emphasize(&emphasize(text, b'*'), b'_')
}

fn headers(text: &str) -> String {
    let html = H4.replace_all(text, "<h4>${1}</h4>");
    H3.replace_all(&html, "<h3>${1}</h3>").into_owned()
}

fn bullet_items(text: &str) -> String {
    BULLET_ITEM.replace_all(text, "<li>${1}</li>").into_owned()
}

fn numbered_items(text: &str) -> String {
    NUMBERED_ITEM.replace_all(text, "<li>${1}</li>").into_owned()
}

/// Wraps everything from the first `<li>` to the last `</li>` in one `<ul>`.
fn wrap_first_list(text: &str) -> String {
    LIST_RUN.replacen(text, 1, "<ul>${0}</ul>").into_owned()
}

fn paragraph_breaks(text: &str) -> String {
    text.replace("\n\n", "</p><p>")
}

fn line_breaks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        result.push_str(line);
        if let Some(next) = lines.peek() {
            // Separator between adjacent list items stays a newline
            if line.trim_end_matches('\r').ends_with("</li>") && next.starts_with("<li>") {
                result.push('\n');
            } else {
                result.push_str("<br>");
            }
        }
    }

    result
}
