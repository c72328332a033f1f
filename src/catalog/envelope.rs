use crate::catalog::{Diagnostic, GENERATOR_NAME, GENERATOR_VERSION, Section};
use serde::{Deserialize, Serialize};

/// Top-level JSON document printed by `--json`.
///
/// Wraps the parsed sections with metadata that makes debugging easier
/// (schema versioning, source info, diagnostics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Schema version for this JSON payload.
    pub schema_version: u32,

    pub generator: GeneratorInfo,

    pub source: SourceInfo,

    /// Loader and parser diagnostics.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,

    pub sections: Vec<Section>,
}

/// Identifies the program that produced the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorInfo {
    pub name: String,
    pub version: String,
}

impl GeneratorInfo {
    pub fn current() -> Self {
        Self {
            name: GENERATOR_NAME.to_string(),
            version: GENERATOR_VERSION.to_string(),
        }
    }
}

/// Where the catalog text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// URL or file path of the document.
    pub location: String,

    /// Length in bytes of the parsed slice (from the marker to the end).
    pub byte_len: u64,
}
