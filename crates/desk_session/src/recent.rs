//! Bounded recent-apps affordance fed by open and focus events.

use desk_app_contract::AppId;
use serde::{Deserialize, Serialize};

/// Maximum number of entries the list retains.
pub const RECENT_APPS_MAX: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Most-recent-first, deduplicated list of launched/focused apps.
///
/// Purely a UI affordance; nothing here participates in window-state
/// invariants.
pub struct RecentApps {
    entries: Vec<AppId>,
}

impl RecentApps {
    /// Moves `app_id` to the front, dropping the oldest entry past the cap.
    pub fn record(&mut self, app_id: &AppId) {
        self.entries.retain(|id| id != app_id);
        self.entries.insert(0, app_id.clone());
        if self.entries.len() > RECENT_APPS_MAX {
            self.entries.truncate(RECENT_APPS_MAX);
        }
    }

    /// Entries, most recent first.
    pub fn as_slice(&self) -> &[AppId] {
        &self.entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> AppId {
        AppId::trusted(raw)
    }

    #[test]
    fn records_most_recent_first_without_duplicates() {
        let mut recent = RecentApps::default();
        recent.record(&id("desk.files"));
        recent.record(&id("desk.sheets"));
        recent.record(&id("desk.files"));

        assert_eq!(recent.as_slice(), &[id("desk.files"), id("desk.sheets")]);
    }

    #[test]
    fn caps_the_list_at_eight_entries() {
        let mut recent = RecentApps::default();
        for n in 0..12 {
            recent.record(&id(&format!("desk.app{n}")));
        }

        assert_eq!(recent.len(), RECENT_APPS_MAX);
        assert_eq!(recent.as_slice()[0], id("desk.app11"));
        assert_eq!(recent.as_slice()[RECENT_APPS_MAX - 1], id("desk.app4"));
    }
}
