//! Badge catalog model and JSON envelope.
//!
//! This module defines the **contract** between:
//! 1) parsing the markdown-badges document -> `Section`s, and
//! 2) everything downstream (selection, previews, `--json` output).
//!
//! The types are plain records: they are produced once per run and never
//! mutated afterwards.

mod badge;
mod diagnostic;
mod envelope;
mod span;

pub use badge::*;
pub use diagnostic::*;
pub use envelope::*;
pub use span::*;

/// JSON schema version for the catalog envelope.
///
/// Bump this when making non-backwards-compatible changes to the JSON structure.
pub const SCHEMA_VERSION: u32 = 1;

/// The generator name stored in the JSON envelope.
pub const GENERATOR_NAME: &str = "badgegen";

/// The generator version stored in the JSON envelope.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_file_json_round_trip() {
        let catalog = CatalogFile {
            schema_version: SCHEMA_VERSION,
            generator: GeneratorInfo::current(),
            source: SourceInfo {
                location: "tests/testdata/README.md".to_string(),
                byte_len: 120,
            },
            diagnostics: vec![Diagnostic {
                severity: Severity::Info,
                phase: Some(DiagnosticPhase::Parse),
                code: Some("table.short_row".to_string()),
                message: "row has 3 cells; at least 4 required".to_string(),
                span: Some(Span::new(80, 90)),
                notes: vec![],
            }],
            sections: vec![Section {
                title: "Cloud".to_string(),
                badges: vec![
                    Badge::new("AWS", Some("https://img.shields.io/badge/AWS.svg?style=flat")),
                    Badge::new("Broken", None::<String>),
                ],
            }],
        };

        let json = serde_json::to_string_pretty(&catalog).expect("serialize");
        let back: CatalogFile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(catalog, back);
    }

    #[test]
    fn missing_link_is_omitted_from_json() {
        let badge = Badge::new("Broken", None::<String>);
        let json = serde_json::to_string(&badge).expect("serialize");
        assert_eq!(json, r#"{"name":"Broken"}"#);
    }
}
