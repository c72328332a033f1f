//! Lightweight fuzz-style tests; no external fuzz harness required.

use badgegen::catalog::Span;
use badgegen::selection::SelectionMap;
use badgegen::style::{Style, apply_style};
use badgegen::{parse, render};

/// Small deterministic PRNG so failures are reproducible from the seed.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next() % items.len() as u64) as usize]
    }
}

const FRAGMENTS: &[&str] = &[
    "###",
    "### ",
    "####",
    "#",
    "|",
    " | ",
    "||",
    "Name",
    " --- ",
    ":---:",
    "(",
    ")",
    "()",
    "![x](",
    "http://x/b.svg?style=flat",
    "&style=",
    "?style=",
    "&",
    "\r",
    "\n",
    "\n",
    "\t",
    " ",
    "é",
    "👍",
    "`",
    "[",
    "]",
];

fn random_doc(rng: &mut XorShift) -> String {
    let len = (rng.next() % 200) as usize;
    let mut out = String::new();
    for _ in 0..len {
        out.push_str(rng.pick(FRAGMENTS));
    }
    out
}

fn check_span(span: &Span, len: usize) {
    let s = span.start as usize;
    let e = span.end as usize;
    assert!(s <= e, "invalid span: start > end: {span:?}");
    assert!(e <= len, "span out of bounds (len={len}): {span:?}");
    assert!(span.len() as usize <= len, "span longer than input: {span:?}");
}

#[test]
fn random_documents_never_panic_and_keep_invariants() {
    for seed in 1..=500u64 {
        let mut rng = XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let src = random_doc(&mut rng);

        let out = parse::parse_document(&src);

        for d in &out.diagnostics {
            if let Some(span) = &d.span {
                check_span(span, src.len());
            }
        }

        // every section title came from a `###` line.
        let headings = src
            .lines()
            .filter(|l| {
                let l = l.strip_suffix('\r').unwrap_or(l);
                l.strip_prefix("###")
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
            })
            .count();
        assert_eq!(out.sections.len(), headings, "seed={seed} src={src:?}");

        let mut selection = SelectionMap::new();
        for badge in out.sections.iter().flat_map(|s| s.badges.iter()) {
            assert_eq!(badge.name, badge.name.trim(), "seed={seed}");
            if let Some(link) = &badge.link {
                assert!(!link.is_empty(), "seed={seed}");
                let flat = apply_style(link, Style::Flat);
                assert_eq!(
                    apply_style(&apply_style(link, Style::Social), Style::Flat),
                    flat,
                    "seed={seed}"
                );
            }
            selection.insert(badge.name.clone(), badge.link.clone());
        }

        let restyled = selection.restyled(Style::Plastic);
        assert_eq!(restyled.len(), selection.len());
        let _ = render::render_markdown(&restyled);
        let _ = render::render_html_preview(&restyled);
        let _ = render::render_catalog(&out.sections, &restyled);
    }
}

#[test]
fn very_long_rows_are_handled() {
    let row = format!("|{}|", " x |".repeat(20_000));
    let src = format!("### Big\n{row}\n{}\n", "(".repeat(50_000));
    let sections = parse::parse(&src);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].badges.len(), 1);
    assert_eq!(sections[0].badges[0].name, "x");
}
