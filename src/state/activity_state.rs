//! Activity feed state: read flags and expansion.

use crate::data::{ActivityEntry, Catalog};

/// State for the activity screen. Owns a session copy of the feed since
/// read/expanded flags mutate while the catalog stays immutable.
#[derive(Debug, Default)]
pub struct ActivityState {
    pub entries: Vec<ActivityEntry>,
    pub selected_index: usize,
    /// Id of the read entry currently expanded, if any.
    pub expanded_id: Option<String>,
}

impl ActivityState {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            entries: catalog.activity().to_vec(),
            selected_index: 0,
            expanded_id: None,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.read).count()
    }

    pub fn all_read(&self) -> bool {
        self.entries.iter().all(|e| e.read)
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.read = true;
        }
    }

    /// Expand a collapsed read entry, or collapse it again.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded_id.as_deref() == Some(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }

    pub fn selected_entry(&self) -> Option<&ActivityEntry> {
        self.entries.get(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_feed() {
        let catalog = Catalog::load();
        let activity = ActivityState::new(&catalog);
        assert_eq!(activity.entries.len(), 5);
        assert_eq!(activity.unread_count(), 3);
        assert!(!activity.all_read());
    }

    #[test]
    fn test_mark_all_read() {
        let catalog = Catalog::load();
        let mut activity = ActivityState::new(&catalog);
        activity.mark_all_read();
        assert!(activity.all_read());
        assert_eq!(activity.unread_count(), 0);
    }

    #[test]
    fn test_mark_single_read() {
        let catalog = Catalog::load();
        let mut activity = ActivityState::new(&catalog);
        activity.mark_read("a1");
        assert!(activity.entries.iter().find(|e| e.id == "a1").unwrap().read);
        assert_eq!(activity.unread_count(), 2);
        // unknown id is a no-op
        activity.mark_read("zz");
        assert_eq!(activity.unread_count(), 2);
    }

    #[test]
    fn test_expand_toggle() {
        let catalog = Catalog::load();
        let mut activity = ActivityState::new(&catalog);
        activity.toggle_expanded("a2");
        assert!(activity.is_expanded("a2"));
        // expanding another collapses the first
        activity.toggle_expanded("a3");
        assert!(!activity.is_expanded("a2"));
        assert!(activity.is_expanded("a3"));
        activity.toggle_expanded("a3");
        assert!(!activity.is_expanded("a3"));
    }
}
