//! Single delimiter emphasis spans.

/// Replaces `<d>content<d>` spans with `<em>content</em>`.
///
/// A delimiter byte counts only when it forms a run of exactly one: neither
/// neighbour may be the same delimiter. Runs are measured against the text as
/// given, so callers that already converted double delimiter spans get the
/// post-bold behavior. Content is non-empty, shortest match, and never spans
/// a line break. Scanning resumes after each closing delimiter.
///
/// # Arguments
///
/// * `text`: Input text
/// * `delim`: ASCII delimiter byte (`*` or `_`)
///
/// # Returns
///
/// Text with every matched span wrapped in `<em>`
pub(super) fn emphasize(text: &str, delim: u8) -> String {
    let bytes = text.as_bytes();
    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if is_single(bytes, pos, delim)
            && let Some(close) = find_close(bytes, pos + 1, delim)
        {
            // Delimiters are ASCII, so both offsets are char boundaries
            result.push_str(&text[copied..pos]);
            result.push_str("<em>");
            result.push_str(&text[pos + 1..close]);
            result.push_str("</em>");
            copied = close + 1;
            pos = close + 1;
            continue;
        }
        pos += 1;
    }

    result.push_str(&text[copied..]);
    result
}

/// Returns true when `bytes[pos]` is a delimiter run of length one.
fn is_single(bytes: &[u8], pos: usize, delim: u8) -> bool {
    bytes[pos] == delim
        && (pos == 0 || bytes[pos - 1] != delim)
        && bytes.get(pos + 1) != Some(&delim)
}

/// Finds the closing delimiter for content starting at `start`.
fn find_close(bytes: &[u8], start: usize, delim: u8) -> Option<usize> {
    for pos in start..bytes.len() {
        if is_line_break(bytes[pos]) {
            return None;
        }
        if pos > start && is_single(bytes, pos, delim) {
            return Some(pos);
        }
    }
    None
}

fn is_line_break(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}
