use serde::{Deserialize, Serialize};

/// A half-open byte-span `[start, end)` into the document handed to the parser,
/// plus the 1-based line number it starts on.
///
/// Offsets are measured in bytes (UTF-8) against the text *after* the
/// `# Badges` marker has been located, since that slice is what gets parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
pub struct Span {
    pub start: u64,
    pub end: u64,

    #[serde(default)]
    pub line: u32,
}

impl Span {
    #[inline]
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "Span start must be <= end");
        Self { start, end, line: 0 }
    }

    #[inline]
    pub fn on_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    #[inline]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
