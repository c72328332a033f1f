//! markdown-badges document -> `Section` list.
//!
//! This parser is line-oriented and **error-tolerant**: a line it cannot use
//! is skipped, never fatal. Every skip is recorded as a `Diagnostic` so the
//! `--json` output can explain where a badge went, but nothing is logged.
//!
//! Recognized lines:
//! - `### Title` opens a new section (level-3 headings only).
//! - `| name | ![alt](url) | ... |` adds a badge to the open section.
//!
//! Everything else (prose, other heading levels, table headers) is ignored.

mod table;
mod util;

use crate::catalog::*;

pub use table::{CELL_DELIM, MIN_CELLS, Row, classify_row};
pub use util::extract_link;
use util::{collect_lines, strip_cr};

/// Heading prefix that opens a section.
pub const SECTION_MARKER: &str = "###";

/// Result of parsing a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub sections: Vec<Section>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn badge_count(&self) -> usize {
        self.sections.iter().map(|s| s.badges.len()).sum()
    }
}

/// Parse the badge catalog into sections, dropping diagnostics.
pub fn parse(src: &str) -> Vec<Section> {
    parse_document(src).sections
}

/// Parse the badge catalog into sections.
///
/// Spans are byte offsets into `src`.
pub fn parse_document(src: &str) -> ParseOutput {
    let mut sections: Vec<Section> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut current: Option<Section> = None;

    for line in collect_lines(src) {
        let text = strip_cr(&src[line.start..line.end]);
        let span = Span::new(line.start as u64, line.end as u64).on_line(line.number);

        if let Some(title) = section_title(text) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::new(title));
            continue;
        }

        match classify_row(text) {
            Row::NotARow | Row::Header => {}
            Row::Short { cells } => diagnostics.push(Diagnostic::parse(
                Severity::Info,
                "table.short_row",
                format!("row has {cells} cells; at least {MIN_CELLS} required"),
                span,
            )),
            Row::Badge(badge) => {
                let Some(section) = current.as_mut() else {
                    diagnostics.push(Diagnostic::parse(
                        Severity::Info,
                        "table.row_outside_section",
                        format!("badge {:?} appears before any section heading", badge.name),
                        span,
                    ));
                    continue;
                };

                if badge.link.is_none() {
                    diagnostics.push(Diagnostic::parse(
                        Severity::Warning,
                        "table.missing_link",
                        format!("badge {:?} has no image link", badge.name),
                        span,
                    ));
                }
                section.badges.push(badge);
            }
        }
    }

    if let Some(done) = current.take() {
        sections.push(done);
    }

    ParseOutput {
        sections,
        diagnostics,
    }
}

/// `### Title` -> `Some("Title")`. `####` and `###Title` are not section headings.
fn section_title(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(SECTION_MARKER)?;
    match rest.chars().next() {
        None => Some(""),
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_section_example() {
        let src = "### Category A\n| Name | Badge | Link | Example |\n| --- | --- | --- | --- |\n| Foo | [img](http://x/badge.svg?style=plastic) | http://y | ex |\n";
        let sections = parse(src);
        assert_eq!(
            sections,
            vec![Section {
                title: "Category A".to_string(),
                badges: vec![Badge::new("Foo", Some("http://x/badge.svg?style=plastic"))],
            }]
        );
    }

    #[test]
    fn no_heading_means_no_sections() {
        let out = parse_document("| Foo | ![a](http://x) | y |\njust prose\n");
        assert!(out.sections.is_empty());
        assert_eq!(
            out.diagnostics[0].code.as_deref(),
            Some("table.row_outside_section")
        );
    }

    #[test]
    fn empty_section_is_kept() {
        let sections = parse("### Empty\n### Full\n| A | ![a](http://a) | x |\n");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Empty");
        assert!(sections[0].badges.is_empty());
        assert_eq!(sections[1].badges.len(), 1);
    }

    #[test]
    fn rows_before_first_heading_do_not_leak_into_it() {
        let sections = parse("| Stray | ![s](http://s) | x |\n### First\n| A | ![a](http://a) | x |\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].badges, vec![Badge::new("A", Some("http://a"))]);
    }

    #[test]
    fn only_level_three_headings_open_sections() {
        let sections = parse("## Badges\n### Real\n#### Nested\n###NoSpace\n| A | ![a](http://a) | x |\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Real");
        assert_eq!(sections[0].badges.len(), 1);
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let sections = parse("### Win\r\n| A | ![a](http://a) | x |\r\n");
        assert_eq!(sections[0].title, "Win");
        assert_eq!(sections[0].badges, vec![Badge::new("A", Some("http://a"))]);
    }

    #[test]
    fn skipped_rows_are_reported_with_their_line() {
        let out = parse_document("### S\n| Short |\n| NoLink | text | x |\n");
        let codes: Vec<_> = out
            .diagnostics
            .iter()
            .map(|d| (d.code.as_deref(), d.span.map(|s| s.line)))
            .collect();
        assert_eq!(
            codes,
            vec![
                (Some("table.short_row"), Some(2)),
                (Some("table.missing_link"), Some(3)),
            ]
        );
        // the link-less badge is still listed.
        assert_eq!(out.badge_count(), 1);
    }
}
