use serde::{Deserialize, Serialize};

/// A titled group of badges, one per `###` subsection of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,

    /// Badges in source row order.
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            badges: Vec::new(),
        }
    }
}

/// One selectable badge: a display name plus the image URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Badge {
    /// Trimmed text of the first table cell. Used as the selection key.
    pub name: String,

    /// Image URL pulled out of the second table cell.
    ///
    /// `None` when the cell has no parenthesized URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Badge {
    pub fn new<N, L>(name: N, link: Option<L>) -> Self
    where
        N: Into<String>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            link: link.map(Into::into),
        }
    }
}
