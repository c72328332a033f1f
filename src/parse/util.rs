use once_cell::sync::Lazy;
use regex::Regex;

/// A byte range for a single line in the source.
///
/// - `start..end` is the line content excluding the trailing `\n`.
/// - `number` is the 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
    pub number: u32,
}

pub fn collect_lines(src: &str) -> Vec<LineRange> {
    let bytes = src.as_bytes();
    let mut out: Vec<LineRange> = Vec::new();
    let mut start = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' {
            out.push(LineRange {
                start,
                end: i,
                number: out.len() as u32 + 1,
            });
            start = i + 1;
        }
    }
    // a trailing newline does not open another (empty) line.
    if start < src.len() {
        out.push(LineRange {
            start,
            end: src.len(),
            number: out.len() as u32 + 1,
        });
    }
    out
}

pub fn strip_cr(s: &str) -> &str {
    s.strip_suffix('\r').unwrap_or(s)
}

// non-greedy: the first `(...)` in the cell wins, even if more follow.
static PAREN_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((.*?)\)").expect("parenthesized URL pattern"));

/// Extract the URL from markdown image/link syntax like `![alt](url)`.
///
/// Empty parentheses count as no link.
pub fn extract_link(cell: &str) -> Option<&str> {
    PAREN_URL
        .captures(cell)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|link| !link.is_empty())
}
