#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use crate::config::{ConfigError, ScreenConfig};

/// One named section of the screen: a nav entry plus a content panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
}

impl Tab {
    /// DOM id of the tab's content panel.
    pub fn panel_id(&self) -> String {
        format!("{}-content", self.id)
    }
}

/// Where the initial active tab came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialSource {
    /// The page was reached through a "next page" link of the theme chooser.
    Pagination,
    /// The URL fragment named a known tab.
    Fragment,
    /// The tab the server marked active (or the first tab).
    Declared,
}

/// What the page URL says about the initial tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitialHints {
    /// URL fragment, with or without the leading `#`.
    pub fragment: Option<String>,
    /// Whether the pagination query parameter is present.
    pub paginated: bool,
}

/// Result of [`TabController::transition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Switched { from: String, to: String },
    AlreadyActive,
    UnknownTab,
}

/// Owns which tab is active. Exactly one tab is active at any time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabController {
    tabs: Vec<Tab>,
    active: usize,
    /// Tab chosen at load; a fragment-less URL maps back to it.
    initial: usize,
    theme_label: Option<String>,
    apply_tab: Option<String>,
}

impl TabController {
    /// Build a controller and pick the initial tab.
    ///
    /// Strategies are tried in order: pagination (forces the apply tab),
    /// fragment, then the declared tab. A fragment naming an unknown tab is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoTabs`] when the config declares no tabs.
    pub fn new(cfg: &ScreenConfig, hints: &InitialHints) -> Result<(Self, InitialSource), ConfigError> {
        let tabs: Vec<Tab> = cfg
            .tabs
            .iter()
            .map(|t| Tab { id: t.id.clone(), label: t.label.clone() })
            .collect();
        if tabs.is_empty() {
            return Err(ConfigError::NoTabs);
        }

        let mut controller = Self {
            tabs,
            active: 0,
            initial: 0,
            theme_label: cfg.theme_label.clone(),
            apply_tab: cfg.apply_tab.clone(),
        };

        let pagination = hints
            .paginated
            .then(|| controller.apply_tab.as_deref().and_then(|id| controller.position(id)))
            .flatten();
        let fragment = hints
            .fragment
            .as_deref()
            .map(normalize_fragment)
            .and_then(|id| controller.position(id));
        let declared = cfg.declared_active().and_then(|id| controller.position(id));

        let (active, source) = if let Some(i) = pagination {
            (i, InitialSource::Pagination)
        } else if let Some(i) = fragment {
            (i, InitialSource::Fragment)
        } else {
            (declared.unwrap_or(0), InitialSource::Declared)
        };
        controller.active = active;
        controller.initial = active;
        Ok((controller, source))
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> &Tab {
        &self.tabs[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().id == id
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Activate `id`. Unknown ids and the already-active tab leave the state
    /// untouched.
    pub fn transition(&mut self, id: &str) -> Transition {
        let Some(next) = self.position(id) else {
            log::warn!("ignoring switch to unknown tab {id:?}");
            return Transition::UnknownTab;
        };
        if next == self.active {
            return Transition::AlreadyActive;
        }
        let from = self.tabs[self.active].id.clone();
        self.active = next;
        Transition::Switched { from, to: self.tabs[next].id.clone() }
    }

    /// Follow a URL fragment change (back/forward navigation). An empty
    /// fragment returns to the tab chosen at load.
    pub fn follow_fragment(&mut self, fragment: &str) -> Transition {
        let id = normalize_fragment(fragment);
        if id.is_empty() {
            let initial = self.tabs[self.initial].id.clone();
            return self.transition(&initial);
        }
        self.transition(id)
    }

    /// Header text for the active tab.
    ///
    /// With a theme label the header reads `"<theme>: <tab>"`, except on the
    /// apply tab which only shows its own label.
    pub fn header_text(&self) -> String {
        let tab = self.active();
        let on_apply_tab = self.apply_tab.as_deref() == Some(tab.id.as_str());
        match &self.theme_label {
            Some(theme) if !on_apply_tab => format!("{theme}: {}", tab.label),
            _ => tab.label.clone(),
        }
    }
}

/// Strip a leading `#` and surrounding whitespace from a fragment.
pub fn normalize_fragment(raw: &str) -> &str {
    raw.trim().trim_start_matches('#')
}
