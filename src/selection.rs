//! The set of badges the user has checked.

use crate::style::{Style, apply_style};

/// One checked badge and the (style-adjusted) link it will be rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedBadge {
    pub name: String,
    pub link: Option<String>,
}

/// Badge name -> link, iterated in the order badges were first checked.
///
/// Re-inserting a name keeps its position and replaces the link, so
/// "check a new badge, then uncheck it" always restores the previous map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    entries: Vec<SelectedBadge>,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&SelectedBadge> {
        self.position(name).map(|i| &self.entries[i])
    }

    pub fn insert(&mut self, name: impl Into<String>, link: Option<String>) {
        let name = name.into();
        match self.position(&name) {
            Some(i) => self.entries[i].link = link,
            None => self.entries.push(SelectedBadge { name, link }),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<SelectedBadge> {
        self.position(name).map(|i| self.entries.remove(i))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectedBadge> {
        self.entries.iter()
    }

    /// A copy of this map with every link rewritten to `style`.
    ///
    /// Entries without a link are carried over as-is.
    pub fn restyled(&self, style: Style) -> SelectionMap {
        let entries = self
            .entries
            .iter()
            .map(|e| SelectedBadge {
                name: e.name.clone(),
                link: e.link.as_deref().map(|link| apply_style(link, style)),
            })
            .collect();
        SelectionMap { entries }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

impl<'a> IntoIterator for &'a SelectionMap {
    type Item = &'a SelectedBadge;
    type IntoIter = std::slice::Iter<'a, SelectedBadge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SelectionMap {
        let mut map = SelectionMap::new();
        map.insert("AWS", Some("http://a.svg?style=flat".to_string()));
        map.insert("Rust", Some("http://r.svg?style=flat&logo=rust".to_string()));
        map
    }

    #[test]
    fn select_then_deselect_restores_prior_state() {
        let before = sample();
        let mut map = before.clone();
        map.insert("Go", Some("http://g.svg".to_string()));
        assert_eq!(map.len(), 3);
        map.remove("Go");
        assert_eq!(map, before);
    }

    #[test]
    fn reinsert_keeps_position_and_last_link_wins() {
        let mut map = sample();
        map.insert("AWS", Some("http://other.svg".to_string()));
        let names: Vec<_> = map.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["AWS", "Rust"]);
        assert_eq!(map.get("AWS").and_then(|e| e.link.as_deref()), Some("http://other.svg"));
    }

    #[test]
    fn clear_always_empties() {
        let mut map = sample();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map, SelectionMap::new());
    }

    #[test]
    fn remove_missing_is_none() {
        let mut map = sample();
        assert!(map.remove("Nope").is_none());
        assert_eq!(map, sample());
    }

    #[test]
    fn restyled_rewrites_every_link_and_keeps_missing_links() {
        let mut map = sample();
        map.insert("Broken", None);
        let restyled = map.restyled(Style::ForTheBadge);
        let links: Vec<_> = restyled.iter().map(|e| e.link.clone()).collect();
        assert_eq!(
            links,
            vec![
                Some("http://a.svg?style=for-the-badge".to_string()),
                Some("http://r.svg?style=for-the-badge&logo=rust".to_string()),
                None,
            ]
        );
        // the original is untouched.
        assert_eq!(map.get("AWS").and_then(|e| e.link.as_deref()), Some("http://a.svg?style=flat"));
    }
}
