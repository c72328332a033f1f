//! Loading the badge catalog: one GET (or one file read), marker lookup, parse.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use reqwest::Url;
use thiserror::Error;

use crate::catalog::{CatalogFile, Diagnostic, GeneratorInfo, SCHEMA_VERSION, SourceInfo};
use crate::parse::{self, ParseOutput};

/// The markdown-badges README.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/Ileriayo/markdown-badges/master/README.md";

/// Where the badge listing starts; everything before it is intro text.
pub const DEFAULT_MARKER: &str = "# Badges";

/// Where to read the catalog document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

impl Source {
    pub fn location(&self) -> String {
        match self {
            Source::Url(url) => url.clone(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid catalog URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed (URL: {url}): {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request failed: {status} (URL: {url})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find the {marker:?} header")]
    MissingMarker { marker: String },
}

impl LoadError {
    /// Stable diagnostic code for the JSON envelope.
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::InvalidUrl { .. }
            | LoadError::Request { .. }
            | LoadError::Status { .. }
            | LoadError::Io { .. } => "load.fetch_failed",
            LoadError::MissingMarker { .. } => "load.missing_marker",
        }
    }
}

/// A parsed catalog together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub source: SourceInfo,
    pub parsed: ParseOutput,
}

impl LoadedCatalog {
    /// The empty catalog a failed load degrades to; the failure is kept as a diagnostic.
    pub fn failed(source: &Source, err: &LoadError) -> Self {
        Self {
            source: SourceInfo {
                location: source.location(),
                byte_len: 0,
            },
            parsed: ParseOutput {
                sections: Vec::new(),
                diagnostics: vec![Diagnostic::load(err.code(), err.to_string())],
            },
        }
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            schema_version: SCHEMA_VERSION,
            generator: GeneratorInfo::current(),
            source: self.source.clone(),
            diagnostics: self.parsed.diagnostics.clone(),
            sections: self.parsed.sections.clone(),
        }
    }
}

fn build_url(url: &str) -> Result<Url, LoadError> {
    let parsed = Url::parse(url).map_err(|e| LoadError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(LoadError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

/// Fetches the raw markdown text with a single unauthenticated GET.
pub fn fetch_markdown(url: &str) -> Result<String, LoadError> {
    let url = build_url(url)?;
    info!("fetching badge catalog from {url}");

    let request_failed = |source| LoadError::Request {
        url: url.to_string(),
        source,
    };

    let resp = reqwest::blocking::get(url.clone()).map_err(request_failed)?;

    if !resp.status().is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let body = resp.text().map_err(request_failed)?;
    debug!("fetched {} bytes", body.len());
    Ok(body)
}

pub fn read_markdown(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    // if we ever encounter invalid UTF-8, fallback to lossy conversion
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

pub fn load_document(source: &Source) -> Result<String, LoadError> {
    match source {
        Source::Url(url) => fetch_markdown(url),
        Source::File(path) => read_markdown(path),
    }
}

/// The part of `doc` from the first occurrence of `marker` onwards.
pub fn badges_content<'a>(doc: &'a str, marker: &str) -> Result<&'a str, LoadError> {
    doc.find(marker)
        .map(|start| &doc[start..])
        .ok_or_else(|| LoadError::MissingMarker {
            marker: marker.to_string(),
        })
}

/// Load, slice at `marker`, and parse.
pub fn load_catalog(source: &Source, marker: &str) -> Result<LoadedCatalog, LoadError> {
    let doc = load_document(source)?;
    let content = badges_content(&doc, marker)?;
    let parsed = parse::parse_document(content);
    info!(
        "parsed {} sections with {} badges",
        parsed.sections.len(),
        parsed.badge_count()
    );

    Ok(LoadedCatalog {
        source: SourceInfo {
            location: source.location(),
            byte_len: content.len() as u64,
        },
        parsed,
    })
}
