//! Screen description embedded in the admin page.
//!
//! The server renders a `<script type="application/json">` element holding
//! the tabs, fields, template rows and asset paths of the Theme Manager
//! screen. Everything the UI shows is built from this description once at
//! load time.
//!
//! ERROR HANDLING
//! ==============
//! Parsing and validation failures surface as [`ConfigError`]; the app shows
//! an inline notice instead of a half-built screen.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::Deserialize;

/// DOM id of the element carrying the screen description.
pub const CONFIG_ELEMENT_ID: &str = "theme-manager-config";
pub const DEFAULT_REBUILD_MODE: &str = "tm.rebuild_tmpl";
pub const DEFAULT_PAGINATION_PARAM: &str = "offset";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config element #{0} not found")]
    MissingElement(String),
    #[error("malformed screen config: {0}")]
    Malformed(String),
    #[error("screen config declares no tabs")]
    NoTabs,
    #[error("duplicate tab id: {0}")]
    DuplicateTab(String),
    #[error("{what} references unknown tab: {tab}")]
    UnknownTab { what: String, tab: String },
}

/// Base URIs for icon images.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AssetPaths {
    #[serde(default = "default_static_uri")]
    pub static_uri: String,
    #[serde(default = "default_plugin_static_uri")]
    pub plugin_static_uri: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self { static_uri: default_static_uri(), plugin_static_uri: default_plugin_static_uri() }
    }
}

fn default_static_uri() -> String {
    "/mt-static/".to_owned()
}

fn default_plugin_static_uri() -> String {
    "/mt-static/plugins/ThemeManager/".to_owned()
}

/// Where and how rebuild requests are sent.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    pub script_url: String,
    pub blog_id: String,
    #[serde(default = "default_rebuild_mode")]
    pub mode: String,
}

fn default_rebuild_mode() -> String {
    DEFAULT_REBUILD_MODE.to_owned()
}

fn default_pagination_param() -> String {
    DEFAULT_PAGINATION_PARAM.to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TabDecl {
    pub id: String,
    pub label: String,
    /// Marked active by the server.
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    Text,
    Textarea,
    Select,
    RadioImage,
}

/// One choice of a select or image-radio field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChoiceDecl {
    pub value: String,
    #[serde(default)]
    pub label: String,
    /// Preview image, used by image-radio fields only.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(default)]
    pub label: String,
    /// Owning tab id.
    pub tab: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub choices: Vec<ChoiceDecl>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// DOM id of the control a field's `<label>` points at.
pub fn field_input_id(name: &str) -> String {
    format!("field-{name}")
}

/// A row of the templates table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TemplateDecl {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
}

/// Full description of the Theme Manager screen.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScreenConfig {
    pub tabs: Vec<TabDecl>,
    #[serde(default)]
    pub theme_label: Option<String>,
    /// Tab whose header never carries the theme name, and which is forced
    /// active when the page is reached through pagination.
    #[serde(default)]
    pub apply_tab: Option<String>,
    #[serde(default = "default_pagination_param")]
    pub pagination_param: String,
    /// Tab hosting the templates table.
    #[serde(default)]
    pub templates_tab: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub templates: Vec<TemplateDecl>,
    #[serde(default)]
    pub assets: AssetPaths,
    pub endpoint: EndpointConfig,
}

impl ScreenConfig {
    /// Parse and validate a screen description.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed, declares no tabs,
    /// repeats a tab id, or references a tab that does not exist.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tabs.is_empty() {
            return Err(ConfigError::NoTabs);
        }

        let mut ids = HashSet::new();
        for tab in &self.tabs {
            if !ids.insert(tab.id.as_str()) {
                return Err(ConfigError::DuplicateTab(tab.id.clone()));
            }
        }

        let check = |what: String, tab: &str| {
            if ids.contains(tab) {
                Ok(())
            } else {
                Err(ConfigError::UnknownTab { what, tab: tab.to_owned() })
            }
        };

        if let Some(tab) = &self.apply_tab {
            check("apply_tab".to_owned(), tab)?;
        }
        if let Some(tab) = &self.templates_tab {
            check("templates_tab".to_owned(), tab)?;
        }
        for field in &self.fields {
            check(format!("field {}", field.name), &field.tab)?;
        }
        Ok(())
    }

    /// Fields owned by `tab`, in declaration order.
    pub fn fields_for<'a>(&'a self, tab: &'a str) -> impl Iterator<Item = &'a FieldDecl> + 'a {
        self.fields.iter().filter(move |f| f.tab == tab)
    }

    /// Id of the tab the server flagged active, or the first tab.
    pub fn declared_active(&self) -> Option<&str> {
        self.tabs
            .iter()
            .find(|t| t.active)
            .or_else(|| self.tabs.first())
            .map(|t| t.id.as_str())
    }
}

/// Read the screen description from the page.
///
/// # Errors
///
/// Returns [`ConfigError::MissingElement`] when the element is absent (or
/// outside a browser), otherwise whatever [`ScreenConfig::from_json`] reports.
pub fn read_embedded() -> Result<ScreenConfig, ConfigError> {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or_else(|| ConfigError::MissingElement(CONFIG_ELEMENT_ID.to_owned()))?;
        ScreenConfig::from_json(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ConfigError::MissingElement(CONFIG_ELEMENT_ID.to_owned()))
    }
}
