//! The controller that owns the catalog, the selection and the active style.

use log::debug;
use thiserror::Error;

use crate::catalog::{Badge, Section};
use crate::render;
use crate::selection::SelectionMap;
use crate::style::{Style, apply_style};

/// Separates the section title from the badge name in `Section/Name`.
pub const SECTION_SEP: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("unknown badge: {0}")]
    UnknownBadge(String),
}

/// Application state for one run.
///
/// `sections` never changes after construction; `selection` and `style`
/// change only through the methods below.
#[derive(Debug, Clone, Default)]
pub struct App {
    sections: Vec<Section>,
    selection: SelectionMap,
    style: Option<Style>,
}

impl App {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            selection: SelectionMap::new(),
            style: None,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    /// `None` until a style is chosen; links keep their published style.
    pub fn style(&self) -> Option<Style> {
        self.style
    }

    pub fn badge_count(&self) -> usize {
        self.sections.iter().map(|s| s.badges.len()).sum()
    }

    /// Badge addressed by `name`, or by `Section/Name` for a badge whose
    /// name is shared with one in an earlier section.
    ///
    /// A plain name resolves to the first badge in document order.
    pub fn find_badge(&self, name: &str) -> Option<&Badge> {
        let exact = self
            .sections
            .iter()
            .flat_map(|s| s.badges.iter())
            .find(|b| b.name == name);
        if exact.is_some() {
            return exact;
        }

        let (section, badge) = name.split_once(SECTION_SEP)?;
        let (section, badge) = (section.trim(), badge.trim());
        self.sections
            .iter()
            .filter(|s| s.title == section)
            .flat_map(|s| s.badges.iter())
            .find(|b| b.name == badge)
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.selection.contains(self.selection_key(name))
    }

    /// Checkbox checked: select the badge addressed by `name`.
    pub fn check(&mut self, name: &str) -> Result<(), AppError> {
        let badge = self
            .find_badge(name)
            .cloned()
            .ok_or_else(|| AppError::UnknownBadge(name.to_string()))?;
        self.check_badge(&badge);
        Ok(())
    }

    /// Select this exact badge. The selection is keyed by name, so a badge
    /// sharing its name with one already selected replaces it.
    pub fn check_badge(&mut self, badge: &Badge) {
        let link = match (&badge.link, self.style) {
            (Some(link), Some(style)) => Some(apply_style(link, style)),
            (link, None) => link.clone(),
            (None, Some(_)) => None,
        };
        debug!("checked {}", badge.name);
        self.selection.insert(badge.name.clone(), link);
    }

    /// Checkbox unchecked. Returns whether the badge was selected.
    pub fn uncheck(&mut self, name: &str) -> bool {
        let key = self.selection_key(name).to_string();
        let removed = self.selection.remove(&key).is_some();
        if removed {
            debug!("unchecked {key}");
        }
        removed
    }

    /// `Section/Name` addresses map to the badge name the selection is keyed by.
    fn selection_key<'a>(&'a self, name: &'a str) -> &'a str {
        match self.find_badge(name) {
            Some(badge) => &badge.name,
            None => name,
        }
    }

    /// Flip the checkbox. Returns the new checked state.
    pub fn toggle(&mut self, name: &str) -> Result<bool, AppError> {
        let badge = self
            .find_badge(name)
            .cloned()
            .ok_or_else(|| AppError::UnknownBadge(name.to_string()))?;
        if self.uncheck(&badge.name) {
            return Ok(false);
        }
        self.check_badge(&badge);
        Ok(true)
    }

    /// Make `style` active and restyle everything already selected.
    pub fn set_style(&mut self, style: Style) {
        debug!("style -> {style} ({} selected)", self.selection.len());
        self.style = Some(style);
        self.selection = self.selection.restyled(style);
    }

    pub fn reset(&mut self) {
        debug!("selection cleared");
        self.selection.clear();
    }

    /// The copyable snippet for the current selection.
    pub fn markdown(&self) -> String {
        render::render_markdown(&self.selection)
    }
}
