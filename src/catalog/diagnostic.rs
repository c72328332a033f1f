use crate::catalog::Span;
use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic emitted while loading or parsing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The phase that produced the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticPhase {
    Load,
    Parse,
}

/// A structured record of a recovery decision.
///
/// The parser never fails; it skips what it cannot use and notes it here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<DiagnosticPhase>,

    /// A stable identifier like `table.short_row`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human readable message.
    pub message: String,

    /// The source line this diagnostic refers to, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub(crate) fn parse(severity: Severity, code: &str, message: String, span: Span) -> Self {
        Self {
            severity,
            phase: Some(DiagnosticPhase::Parse),
            code: Some(code.to_string()),
            message,
            span: Some(span),
            notes: Vec::new(),
        }
    }

    pub(crate) fn load(code: &str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            phase: Some(DiagnosticPhase::Load),
            code: Some(code.to_string()),
            message,
            span: None,
            notes: vec!["catalog is empty because the source could not be used".to_string()],
        }
    }
}
