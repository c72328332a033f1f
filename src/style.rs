//! Badge styles and the `style=` query rewriter.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visual variants understood by shields.io-style badge URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Plastic,
    Flat,
    FlatSquare,
    ForTheBadge,
    Social,
}

impl Style {
    /// All styles, in the order they are offered to the user.
    pub const ALL: [Style; 5] = [
        Style::Plastic,
        Style::Flat,
        Style::FlatSquare,
        Style::ForTheBadge,
        Style::Social,
    ];

    /// The value that goes into the `style=` query parameter.
    pub fn token(self) -> &'static str {
        match self {
            Style::Plastic => "plastic",
            Style::Flat => "flat",
            Style::FlatSquare => "flat-square",
            Style::ForTheBadge => "for-the-badge",
            Style::Social => "social",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Plastic => "Plastic",
            Style::Flat => "Flat",
            Style::FlatSquare => "Flat Square",
            Style::ForTheBadge => "For the Badge",
            Style::Social => "Social",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style {0:?} (expected one of: plastic, flat, flat-square, for-the-badge, social)")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

// `style=` only counts as a query parameter right after `?` or `&`.
static STYLE_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([?&])style=[^&]*").expect("style parameter pattern"));

/// Rewrite the `style=` query parameter of `link` to `style`.
///
/// Only the value up to the next `&` (or the end) is replaced; the path and
/// all other parameters are untouched. A link without a `style=` parameter
/// is returned unchanged.
pub fn apply_style(link: &str, style: Style) -> String {
    STYLE_PARAM
        .replace(link, |caps: &Captures| {
            format!("{}style={}", &caps[1], style.token())
        })
        .into_owned()
}
