#[cfg(test)]
#[path = "changes_test.rs"]
mod changes_test;

use std::collections::HashSet;

/// Tabs whose fields were edited since the page loaded.
///
/// Flags are one-way: nothing clears them short of a reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeTracker {
    known: HashSet<String>,
    changed: HashSet<String>,
}

impl ChangeTracker {
    pub fn new<I, S>(tab_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { known: tab_ids.into_iter().map(Into::into).collect(), changed: HashSet::new() }
    }

    /// Flag `tab` as changed. Returns `true` the first time a tab is flagged.
    pub fn mark(&mut self, tab: &str) -> bool {
        if !self.known.contains(tab) {
            log::warn!("change reported for unknown tab {tab:?}");
            return false;
        }
        self.changed.insert(tab.to_owned())
    }

    pub fn is_changed(&self, tab: &str) -> bool {
        self.changed.contains(tab)
    }

    #[cfg(test)]
    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }
}
