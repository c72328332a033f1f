//! AFL++ fuzz target for the badge catalog parser.
//!
//! This binary is stdin-driven, so it can be used with AFL++.
//! Build and run it via `cargo-afl`:
//!
//! ```bash
//! cargo install cargo-afl
//!
//! cargo afl build --release --features afl_fuzz --bin badgegen_afl_parse
//!
//! mkdir -p fuzz/afl/out
//!
//! cargo afl fuzz \
//!   -i fuzz/afl/in \
//!   -o fuzz/afl/out \
//!   target/release/badgegen_afl_parse
//! ```
//!
//! Rust panics normally unwind and exit with a non-crashing status code.
//! AFL++ only treats crashes as signals/aborts. We therefore catch any unwind
//! and turn it into `abort()`.

use std::io::Read;

use badgegen::catalog::*;
use badgegen::selection::SelectionMap;
use badgegen::style::{Style, apply_style};
use badgegen::{fetch, parse, render};

const MAX_INPUT_LEN: usize = 1_000_000; // 1MB guardrail; AFL++ will typically cap this anyway.

fn check_span(span: &Span, len: usize) {
    let s = span.start as usize;
    let e = span.end as usize;
    assert!(s <= e, "invalid span: start > end: {span:?}");
    assert!(e <= len, "span out of bounds (len={len}): {span:?}");
    assert!(span.line >= 1, "span without line number: {span:?}");
}

fn run_one_input(data: &[u8]) {
    if data.len() > MAX_INPUT_LEN {
        return;
    }

    // lossy conversion keeps the harness total (no early returns that reduce coverage).
    let doc = String::from_utf8_lossy(data).to_string();

    // the marker is optional here so both paths get exercised.
    let src = fetch::badges_content(&doc, fetch::DEFAULT_MARKER).unwrap_or(&doc);
    let out = parse::parse_document(src);

    for d in &out.diagnostics {
        if let Some(span) = &d.span {
            check_span(span, src.len());
        }
    }

    // every badge goes through selection, restyle and rendering.
    let mut selection = SelectionMap::new();
    for badge in out.sections.iter().flat_map(|s| s.badges.iter()) {
        assert_eq!(badge.name, badge.name.trim(), "untrimmed badge name");
        if let Some(link) = &badge.link {
            let once = apply_style(link, Style::Flat);
            assert_eq!(apply_style(&once, Style::Flat), once, "restyle is not idempotent");
        }
        selection.insert(badge.name.clone(), badge.link.clone());
    }
    let selection = selection.restyled(Style::ForTheBadge);
    let _md = render::render_markdown(&selection);
    let _html = render::render_html_preview(&selection);
    let _list = render::render_catalog(&out.sections, &selection);

    // JSON round-trip must never panic.
    let file = CatalogFile {
        schema_version: SCHEMA_VERSION,
        generator: GeneratorInfo::current(),
        source: SourceInfo {
            location: "stdin".to_string(),
            byte_len: src.len() as u64,
        },
        diagnostics: out.diagnostics,
        sections: out.sections,
    };
    let json = serde_json::to_vec(&file).unwrap();
    let back: CatalogFile = serde_json::from_slice(&json).unwrap();
    assert_eq!(file, back);
}

fn main() {
    let mut data = Vec::new();
    std::io::stdin().read_to_end(&mut data).unwrap();

    // convert any panic into an abort().
    if std::panic::catch_unwind(|| run_one_input(&data)).is_err() {
        std::process::abort();
    }
}
