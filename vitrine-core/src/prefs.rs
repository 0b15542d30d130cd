//! The preference-store collaborator boundary.
//!
//! The core never persists anything itself; hosts hand it something
//! implementing [`PreferenceStore`] and keep the storage medium to
//! themselves. `MemoryPrefs` is the default and the test double.

use std::collections::BTreeSet;
use std::collections::VecDeque;

/// Favorites and visit history, as seen from the core.
///
/// Object-safe so hosts can store a `Box<dyn PreferenceStore>`.
pub trait PreferenceStore: Send + Sync {
    /// Whether `id` is currently a favorite.
    fn is_marked(&self, id: &str) -> bool;

    /// Add `id` to the favorites. Marking twice is a no-op.
    fn mark(&mut self, id: &str);

    /// Remove `id` from the favorites. Unmarking a non-favorite is a no-op.
    fn unmark(&mut self, id: &str);

    /// Note that `id` was opened. Revisits move it to the front of the
    /// history rather than duplicating it.
    fn record_visit(&mut self, id: &str);

    /// Favorite ids, in lexicographic order.
    fn marked(&self) -> Vec<String>;

    /// Visited ids, most recent first.
    fn recent(&self) -> Vec<String>;
}

/// How many visits a store is expected to retain.
pub const RECENT_CAP: usize = 20;

/// In-memory store: process-lifetime only, nothing written anywhere.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    favorites: BTreeSet<String>,
    recents: VecDeque<String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn is_marked(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    fn mark(&mut self, id: &str) {
        self.favorites.insert(id.to_owned());
    }

    fn unmark(&mut self, id: &str) {
        self.favorites.remove(id);
    }

    fn record_visit(&mut self, id: &str) {
        self.recents.retain(|seen| seen != id);
        self.recents.push_front(id.to_owned());
        self.recents.truncate(RECENT_CAP);
    }

    fn marked(&self) -> Vec<String> {
        self.favorites.iter().cloned().collect()
    }

    fn recent(&self) -> Vec<String> {
        self.recents.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_unmark_round_trip() {
        let mut prefs = MemoryPrefs::new();
        assert!(!prefs.is_marked("gold-button"));

        prefs.mark("gold-button");
        prefs.mark("gold-button");
        assert!(prefs.is_marked("gold-button"));
        assert_eq!(prefs.marked(), vec!["gold-button"]);

        prefs.unmark("gold-button");
        prefs.unmark("gold-button");
        assert!(!prefs.is_marked("gold-button"));
    }

    #[test]
    fn test_revisit_moves_to_front() {
        let mut prefs = MemoryPrefs::new();
        prefs.record_visit("a");
        prefs.record_visit("b");
        prefs.record_visit("a");

        assert_eq!(prefs.recent(), vec!["a", "b"]);
    }

    #[test]
    fn test_recents_are_capped() {
        let mut prefs = MemoryPrefs::new();
        for i in 0..(RECENT_CAP + 5) {
            prefs.record_visit(&format!("exhibit-{i}"));
        }

        let recent = prefs.recent();
        assert_eq!(recent.len(), RECENT_CAP);
        assert_eq!(recent[0], format!("exhibit-{}", RECENT_CAP + 4));
    }
}
